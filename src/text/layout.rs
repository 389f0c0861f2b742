//! Canvas sizing for monospace text.
//!
//! ```text
//! width  = max(line_width) + margin
//! height = line_count * line_pitch + margin
//! ```

use super::TextDocument;
use super::font::GlyphMetrics;
use crate::config::RenderConfig;

/// Computed canvas dimensions for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub metrics: GlyphMetrics,
}

impl Layout {
    /// Dimensions clamped to at least 1×1 for allocation.
    pub fn renderable_size(&self) -> (u32, u32) {
        (self.width.max(1), self.height.max(1))
    }
}

/// Rendered pixel width of one line.
pub fn measure_line(line: &str, metrics: &GlyphMetrics) -> u32 {
    let chars = u32::try_from(line.chars().count()).unwrap_or(u32::MAX);
    chars.saturating_mul(metrics.advance)
}

/// Compute canvas dimensions for `document`.
///
/// An empty document yields a `margin × margin` layout.
pub fn layout(document: &TextDocument, config: &RenderConfig) -> Layout {
    let metrics = config.glyph_metrics();

    let max_line_width = document
        .lines()
        .iter()
        .map(|line| measure_line(line, &metrics))
        .max()
        .unwrap_or(0);

    let line_count = u32::try_from(document.line_count()).unwrap_or(u32::MAX);

    let layout = Layout {
        width: max_line_width.saturating_add(config.margin),
        height: line_count
            .saturating_mul(metrics.line_pitch)
            .saturating_add(config.margin),
        metrics,
    };
    log::debug!(
        "layout: {} lines, widest {}px → {}x{}",
        line_count,
        max_line_width,
        layout.width,
        layout.height
    );
    layout
}
