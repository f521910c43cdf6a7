use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::font::{CellMetrics, FontKind, MonoFont, REFERENCE_CHAR};
use crate::text::AsciiArt;
use image::{GrayImage, ImageFormat, Rgba, RgbaImage};
use log::{debug, info};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Upper bound on canvas area, keeps the RGBA buffer around 1 GiB
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

/// Color of drawn glyphs, alpha comes from glyph coverage
const GLYPH_COLOR: [u8; 3] = [255, 255, 255];
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// An ASCII art picture rendered in memory
#[derive(Debug, Clone)]
pub struct Rendering {
    pub image: RgbaImage,
    pub cell: CellMetrics,
    pub font: FontKind,
}

/// What `convert` produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub lines: usize,
    pub max_width: usize,
    pub cell: CellMetrics,
    pub font: FontKind,
}

/// Computes the canvas size for a grid of text plus padding on every side
///
/// # Arguments
/// * `columns` - Longest line in characters
/// * `rows` - Number of lines
/// * `cell` - Measured glyph cell
/// * `padding` - Border in pixels
///
/// # Returns
/// `(width, height)` in pixels, or an error for a zero-sized cell or a
/// canvas that cannot be allocated
pub fn canvas_size(
    columns: usize,
    rows: usize,
    cell: CellMetrics,
    padding: u32,
) -> Result<(u32, u32)> {
    if cell.width == 0 || cell.height == 0 {
        return Err(RenderError::DegenerateCell {
            width: cell.width,
            height: cell.height,
        });
    }

    let span = |count: usize, size: u32| -> Option<u32> {
        u32::try_from(count)
            .ok()?
            .checked_mul(size)?
            .checked_add(padding.checked_mul(2)?)
    };
    let too_large = || RenderError::CanvasTooLarge { columns, rows };

    let width = span(columns, cell.width).ok_or_else(too_large)?;
    let height = span(rows, cell.height).ok_or_else(too_large)?;

    if width as u64 * height as u64 > MAX_CANVAS_PIXELS {
        return Err(too_large());
    }
    Ok((width, height))
}

/// Draws each line into a coverage mask, one glyph cell per row
///
/// Line `i` starts at `(padding, padding + i * cell.height)`.
pub fn render_lines(
    coverage: &mut GrayImage,
    font: &MonoFont,
    lines: &[String],
    cell: CellMetrics,
    padding: u32,
) {
    // canvas_size bounds every offset well below i32::MAX
    let mut y = padding as i64;
    for line in lines {
        font.draw_line(coverage, padding as i32, y as i32, line);
        y += cell.height as i64;
    }
}

/// Turns glyph coverage into white pixels on a transparent background
fn colorize(coverage: &GrayImage) -> RgbaImage {
    let (width, height) = coverage.dimensions();
    RgbaImage::from_fn(width, height, |x, y| match coverage.get_pixel(x, y)[0] {
        0 => TRANSPARENT,
        alpha => Rgba([GLYPH_COLOR[0], GLYPH_COLOR[1], GLYPH_COLOR[2], alpha]),
    })
}

/// Renders ASCII art to an in-memory image
///
/// This implements the full pipeline:
/// 1. Resolve a monospace font (falling back to the built-in font)
/// 2. Measure the glyph cell with the reference character
/// 3. Size the canvas from the longest line and the line count
/// 4. Draw every line in white on a transparent canvas
pub fn render(art: &AsciiArt, config: &RenderConfig) -> Result<Rendering> {
    config.validate().map_err(RenderError::InvalidConfig)?;

    let font = MonoFont::discover(config);
    let cell = font.measure(REFERENCE_CHAR);

    let (width, height) = canvas_size(art.max_width(), art.line_count(), cell, config.padding)?;
    debug!(
        "Canvas {}x{} for {} lines of up to {} chars",
        width,
        height,
        art.line_count(),
        art.max_width()
    );

    let mut coverage = GrayImage::new(width, height);
    render_lines(&mut coverage, &font, art.lines(), cell, config.padding);

    Ok(Rendering {
        image: colorize(&coverage),
        cell,
        font: font.kind(),
    })
}

/// Encodes an image as PNG in memory
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Converts an ASCII art text file into a transparent PNG
///
/// The PNG is fully encoded before `output` is opened, so a failed encode
/// never leaves a partial file behind.
///
/// # Arguments
/// * `input` - Text file with the ASCII art
/// * `output` - Destination PNG path
/// * `config` - Font size, padding and font candidates
pub fn convert(input: &Path, output: &Path, config: &RenderConfig) -> Result<RenderSummary> {
    let art = AsciiArt::from_file(input)?;
    let rendering = render(&art, config)?;
    let png = encode_png(&rendering.image)?;
    fs::write(output, png).map_err(|e| RenderError::io(output, e))?;

    let (width, height) = rendering.image.dimensions();
    info!(
        "Rendered {} ({} lines) to {} with {}",
        input.display(),
        art.line_count(),
        output.display(),
        rendering.font
    );

    Ok(RenderSummary {
        output: output.to_path_buf(),
        width,
        height,
        lines: art.line_count(),
        max_width: art.max_width(),
        cell: rendering.cell,
        font: rendering.font,
    })
}
