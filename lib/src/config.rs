use std::path::PathBuf;

/// Monospace fonts probed in order when no explicit font is configured
pub const DEFAULT_FONT_PATHS: [&str; 4] = [
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
];

/// Largest accepted glyph scale, in pixels
pub const MAX_FONT_SIZE: f32 = 512.0;

/// Largest accepted border, in pixels
pub const MAX_PADDING: u32 = 4096;

/// Configuration for ASCII art rasterization
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Glyph scale in pixels for scalable fonts, default 16.0
    pub font_size: f32,

    /// Transparent border on every side, default 20
    pub padding: u32,

    /// Font files to try, first existing one wins.
    /// Empty means the built-in bitmap font is used directly.
    pub font_paths: Vec<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            padding: 20,
            font_paths: DEFAULT_FONT_PATHS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl RenderConfig {
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Prepends a font so it is tried before the existing candidates
    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_paths.insert(0, path.into());
        self
    }

    /// Skips font discovery and renders with the built-in bitmap font
    pub fn builtin_only(mut self) -> Self {
        self.font_paths.clear();
        self
    }

    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if !self.font_size.is_finite() || self.font_size < 1.0 || self.font_size > MAX_FONT_SIZE {
            return Err(format!(
                "font_size must be between 1 and {}, got {}",
                MAX_FONT_SIZE, self.font_size
            ));
        }
        if self.padding > MAX_PADDING {
            return Err(format!(
                "padding must be <= {}, got {}",
                MAX_PADDING, self.padding
            ));
        }
        Ok(())
    }
}
