//! # Monospace Text Rendering
//!
//! Plain text ("format A") is laid out on a fixed-advance grid and drawn with
//! the Spleen bitmap fonts.
//!
//! ## Pipeline
//!
//! ```text
//! TextDocument → layout() → Layout { width, height } → rasterize() → Canvas
//! ```

pub mod font;
pub mod layout;
pub mod raster;

pub use font::GlyphMetrics;
pub use layout::{Layout, layout, measure_line};
pub use raster::rasterize;

use std::io::Read;

use crate::error::Result;

/// An ordered list of independently measured text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    lines: Vec<String>,
}

impl TextDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split text into lines on `\n`, `\r\n` or a lone `\r`.
    /// A trailing line terminator does not add an empty line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: split_lines(text).into_iter().map(str::to_string).collect(),
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Read a whole UTF-8 text stream.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::from_text(&text))
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split on `\n`, `\r\n` and lone `\r`, the way a line reader does.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(i) => {
                lines.push(&rest[..i]);
                let terminator = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}
