use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No content in ASCII file")]
    EmptyInput,
    #[error("font measured a degenerate glyph cell ({width}x{height})")]
    DegenerateCell { width: u32, height: u32 },
    #[error("canvas size overflows for {columns} columns x {rows} rows")]
    CanvasTooLarge { columns: usize, rows: usize },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

impl RenderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
