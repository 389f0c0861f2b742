//! Glyph drawing onto a [`Canvas`].

use std::collections::HashMap;

use super::font::{GlyphMetrics, generate_glyph};
use super::layout::Layout;
use super::TextDocument;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::render::canvas::{Canvas, Rgb};

/// Allocate a background-filled canvas of the layout's size and draw `document` on it.
///
/// Fails with [`RasterError::CanvasTooLarge`](crate::error::RasterError::CanvasTooLarge)
/// when the layout exceeds the canvas pixel budget.
pub fn rasterize(document: &TextDocument, layout: &Layout, config: &RenderConfig) -> Result<Canvas> {
    let (width, height) = layout.renderable_size();
    let mut canvas = Canvas::try_new(width, height, config.background)?;
    draw_lines(
        &mut canvas,
        document,
        &layout.metrics,
        config.left_margin,
        config.ink,
    );
    Ok(canvas)
}

/// Draw each line left-aligned at `left_margin`, baselines at
/// `line_pitch, 2 * line_pitch, ...`. No wrapping; ink outside the
/// canvas is dropped.
pub fn draw_lines(
    canvas: &mut Canvas,
    document: &TextDocument,
    metrics: &GlyphMetrics,
    left_margin: u32,
    ink: Rgb,
) {
    let mut glyph_cache: HashMap<char, Vec<u8>> = HashMap::new();
    let mut baseline = i64::from(metrics.line_pitch);

    for line in document.lines() {
        let top = baseline - i64::from(metrics.ascent());
        let mut x = i64::from(left_margin);

        for ch in line.chars() {
            let glyph = glyph_cache
                .entry(ch)
                .or_insert_with(|| generate_glyph(metrics, ch));
            blit_glyph(canvas, glyph, metrics, x, top, ink);
            x += i64::from(metrics.advance);
        }

        baseline += i64::from(metrics.line_pitch);
    }
}

fn blit_glyph(canvas: &mut Canvas, glyph: &[u8], metrics: &GlyphMetrics, x: i64, y: i64, ink: Rgb) {
    let w = metrics.advance as usize;
    if w == 0 {
        return;
    }
    for (idx, &on) in glyph.iter().enumerate() {
        if on != 0 {
            let gx = (idx % w) as i64;
            let gy = (idx / w) as i64;
            canvas.set_signed(x + gx, y + gy, ink);
        }
    }
}
