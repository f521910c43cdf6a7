//! Monospace font resolution and measurement
//!
//! A conversion uses exactly one font: the first configured font file that
//! exists, or the built-in 8×8 bitmap font when none exists or it fails to
//! load. Both kinds measure a glyph cell and draw text into a coverage mask.

use crate::bitmap;
use crate::config::RenderConfig;
use ab_glyph::{Font, FontVec, PxScale, ScaleFont, point};
use image::{GrayImage, Luma};
use imageproc::drawing::draw_text_mut;
use log::{debug, info, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Character measured to size the glyph cell
pub const REFERENCE_CHAR: char = 'M';

/// Full coverage in a glyph mask
const COVERAGE_FULL: Luma<u8> = Luma([255]);

/// Pixel footprint assumed for every character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub width: u32,
    pub height: u32,
}

/// Which typeface a conversion ended up using
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontKind {
    Scalable(PathBuf),
    Builtin,
}

impl fmt::Display for FontKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontKind::Scalable(path) => write!(f, "{}", path.display()),
            FontKind::Builtin => f.write_str("built-in 8x8 bitmap font"),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum FontLoadError {
    #[error("cannot read font file: {0}")]
    Read(#[from] std::io::Error),
    #[error("not a usable font: {0}")]
    Parse(#[from] ab_glyph::InvalidFont),
}

/// Outline font scaled to a pixel size
pub struct ScalableFont {
    font: FontVec,
    scale: PxScale,
    path: PathBuf,
}

impl fmt::Debug for ScalableFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalableFont")
            .field("path", &self.path)
            .field("scale", &self.scale)
            .finish()
    }
}

impl ScalableFont {
    /// Loads face 0 of a TTF/OTF/TTC file at `size` pixels per em
    pub(crate) fn load(path: &Path, size: f32) -> Result<Self, FontLoadError> {
        let data = fs::read(path)?;
        let font = FontVec::try_from_vec_and_index(data, 0)?;
        let scale = em_scale(&font, size);
        Ok(Self {
            font,
            scale,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cell of `ch` laid out with the pen at the origin
    ///
    /// The width spans from the pen origin (or the ink, if it starts left of
    /// it) to the pen advance (or the ink, if it ends right of it), so a run
    /// of `n` characters never exceeds `n * width`. The height is the ink
    /// height.
    fn measure(&self, ch: char) -> CellMetrics {
        let scaled = self.font.as_scaled(self.scale);
        let glyph_id = self.font.glyph_id(ch);
        let advance = scaled.h_advance(glyph_id);
        let glyph = glyph_id.with_scale_and_position(self.scale, point(0.0, scaled.ascent()));

        match self.font.outline_glyph(glyph) {
            Some(outlined) => {
                let bounds = outlined.px_bounds();
                let left = bounds.min.x.min(0.0);
                let right = bounds.max.x.max(advance);
                CellMetrics {
                    width: (right - left).ceil().max(0.0) as u32,
                    height: (bounds.max.y - bounds.min.y).round().max(0.0) as u32,
                }
            }
            None => CellMetrics {
                width: 0,
                height: 0,
            },
        }
    }
}

/// `PxScale` is the ascent-to-descent height; convert so `size` is the em size
fn em_scale(font: &FontVec, size: f32) -> PxScale {
    match font.units_per_em() {
        Some(units_per_em) if units_per_em > 0.0 => {
            PxScale::from(size * font.height_unscaled() / units_per_em)
        }
        _ => PxScale::from(size),
    }
}

/// Font used for one conversion
#[derive(Debug)]
pub enum MonoFont {
    /// Outline font from the filesystem, scaled to the configured size
    Scalable(ScalableFont),
    /// Fixed-size 8×8 bitmap font, ignores the configured size
    Builtin,
}

impl MonoFont {
    pub fn builtin() -> Self {
        MonoFont::Builtin
    }

    /// Picks the first configured font file that exists
    ///
    /// Falls back to the built-in font if no candidate exists or the first
    /// existing one cannot be loaded. Never fails.
    pub fn discover(config: &RenderConfig) -> Self {
        for path in &config.font_paths {
            if !path.exists() {
                debug!("Font candidate {} not found", path.display());
                continue;
            }

            return match ScalableFont::load(path, config.font_size) {
                Ok(font) => {
                    info!(
                        "Using font {} at {}px",
                        path.display(),
                        config.font_size
                    );
                    MonoFont::Scalable(font)
                }
                Err(e) => {
                    warn!(
                        "Failed to load font {}: {}; falling back to built-in font",
                        path.display(),
                        e
                    );
                    MonoFont::Builtin
                }
            };
        }

        if !config.font_paths.is_empty() {
            warn!("No monospace font found; falling back to built-in font");
        }
        MonoFont::Builtin
    }

    pub fn kind(&self) -> FontKind {
        match self {
            MonoFont::Scalable(font) => FontKind::Scalable(font.path().to_path_buf()),
            MonoFont::Builtin => FontKind::Builtin,
        }
    }

    /// Measures `ch` to size the cell of every character
    ///
    /// Scalable fonts report the pen advance (widened to the ink if needed)
    /// by the ink height, the bitmap font reports its full cell.
    pub fn measure(&self, ch: char) -> CellMetrics {
        let metrics = match self {
            MonoFont::Scalable(font) => font.measure(ch),
            MonoFont::Builtin => CellMetrics {
                width: bitmap::CELL_SIZE,
                height: bitmap::CELL_SIZE,
            },
        };
        debug!(
            "Measured {:?}: {}x{} px cell",
            ch, metrics.width, metrics.height
        );
        metrics
    }

    /// Draws one line of text into a coverage mask with its top-left at (x, y)
    ///
    /// Coverage outside the mask is clipped.
    pub fn draw_line(&self, coverage: &mut GrayImage, x: i32, y: i32, text: &str) {
        match self {
            MonoFont::Scalable(font) => {
                draw_text_mut(coverage, COVERAGE_FULL, x, y, font.scale, &font.font, text);
            }
            MonoFont::Builtin => bitmap::draw_text(coverage, x as i64, y as i64, text),
        }
    }
}
