//! ascii2png - render plain-text ASCII art into transparent PNG images
//!
//! Every character is drawn in white with a monospace font: the first
//! available system font from a candidate list, or a built-in 8×8 bitmap
//! font when none can be loaded.
//!
//! # Example
//! ```no_run
//! use ascii2png::{convert, RenderConfig};
//! use std::path::Path;
//!
//! let config = RenderConfig::default().with_font_size(20.0);
//! let summary = convert(Path::new("logo.txt"), Path::new("logo.png"), &config).unwrap();
//! println!("Created {} ({}x{})", summary.output.display(), summary.width, summary.height);
//! ```

pub mod bitmap;
pub mod config;
pub mod error;
pub mod font;
pub mod processor;
pub mod text;

// Re-export main types for convenience
pub use config::RenderConfig;
pub use error::{RenderError, Result};
pub use font::{CellMetrics, FontKind, MonoFont};
pub use processor::{RenderSummary, Rendering, canvas_size, convert, render};
pub use text::AsciiArt;
