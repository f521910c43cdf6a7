//! Source text handling
//!
//! Loads ASCII art from disk and trims blank lines from both ends while
//! keeping interior blank lines, which are part of the picture.

use crate::error::{RenderError, Result};
use std::fs;
use std::path::Path;

/// Lines of ASCII art ready to be rasterized
///
/// Always holds at least one line; the first and last lines are never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    lines: Vec<String>,
}

impl AsciiArt {
    /// Reads and trims an ASCII art file
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| RenderError::io(path, e))?;
        Self::parse(&String::from_utf8_lossy(&bytes))
    }

    /// Splits text into lines, dropping `\n` / `\r\n` terminators
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_lines(text.lines().map(str::to_owned).collect())
    }

    /// Builds from already split lines, trimming blank lines at both ends
    ///
    /// # Returns
    /// `RenderError::EmptyInput` if nothing but blank lines was given
    pub fn from_lines(lines: Vec<String>) -> Result<Self> {
        let Some(first) = lines.iter().position(|l| !is_blank(l)) else {
            return Err(RenderError::EmptyInput);
        };
        // a non-blank line exists, so rposition finds one too
        let last = lines.iter().rposition(|l| !is_blank(l)).unwrap_or(first);

        let lines = lines
            .into_iter()
            .skip(first)
            .take(last - first + 1)
            .collect();
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Longest line measured in characters, tabs counted as one
    pub fn max_width(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
