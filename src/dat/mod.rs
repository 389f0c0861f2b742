//! # Pixel DAT Records
//!
//! A pixel DAT file is a sparse list of coloured coordinates, one per line:
//!
//! ```text
//! 0,0:255,0,0
//! 1,0:0,255,0
//! 0,1:0,0,255
//! ```
//!
//! Parsing produces a [`RecordSet`]: a coordinate → colour table (last record
//! for a coordinate wins) together with its [`Extent`], the origin-anchored
//! bounding box `(max_x + 1, max_y + 1)`.

mod parse;

pub use parse::{parse_line, parse_reader, parse_records};

use std::collections::BTreeMap;

use crate::error::RasterError;
use crate::render::canvas::Rgb;

/// A single sparse pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRecord {
    pub x: u32,
    pub y: u32,
    pub color: Rgb,
}

impl ColorRecord {
    pub const fn new(x: u32, y: u32, color: Rgb) -> Self {
        Self { x, y, color }
    }
}

/// Implicit source width/height of a sparse coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Grow to include (x, y).
    fn include(&mut self, x: u32, y: u32) {
        self.width = self.width.max(x.saturating_add(1));
        self.height = self.height.max(y.saturating_add(1));
    }
}

/// A DAT line dropped by the parser (1-based line number).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub reason: String,
}

impl SkippedLine {
    /// The recoverable [`RasterError::MalformedRecord`] for this line.
    pub fn to_error(&self) -> RasterError {
        RasterError::MalformedRecord {
            line: self.line,
            reason: self.reason.clone(),
        }
    }
}

/// Parsed DAT content.
///
/// Records are keyed by `(y, x)` so iteration runs in row-major order,
/// which keeps every conversion over the same set byte-identical.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    colors: BTreeMap<(u32, u32), Rgb>,
    extent: Extent,
    skipped: Vec<SkippedLine>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any earlier colour at the same coordinate.
    pub fn insert(&mut self, record: ColorRecord) {
        self.colors.insert((record.y, record.x), record.color);
        self.extent.include(record.x, record.y);
    }

    pub(crate) fn note_skipped(&mut self, skipped: SkippedLine) {
        self.skipped.push(skipped);
    }

    /// Number of distinct coordinates.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// `(max_x + 1, max_y + 1)`, or `(0, 0)` for an empty set.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Colour recorded at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.colors.get(&(y, x)).copied()
    }

    /// Records in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ColorRecord> + '_ {
        self.colors
            .iter()
            .map(|(&(y, x), &color)| ColorRecord::new(x, y, color))
    }

    /// Lines dropped during parsing.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }
}

impl FromIterator<ColorRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = ColorRecord>>(iter: I) -> Self {
        let mut set = RecordSet::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}
