//! Glyph metrics and bitmap generation.
//!
//! Uses the Spleen bitmap font family. Spleen cells are twice as tall as
//! they are wide, so the fixed advance for a font size is half the size.
//! The closest Spleen cell is scaled nearest-neighbour to `advance × font_size`.

use spleen_font::{FONT_6X12, FONT_8X16, FONT_12X24, PSF2Font};

use crate::config::RenderConfig;

/// Monospace glyph dimensions for one font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphMetrics {
    /// Cell height in pixels
    pub font_size: u32,
    /// Fixed horizontal advance per character
    pub advance: u32,
    /// Baseline-to-baseline distance
    pub line_pitch: u32,
}

impl GlyphMetrics {
    pub fn for_size(font_size: u32, line_gap: u32) -> Self {
        Self {
            font_size,
            advance: font_size.div_ceil(2),
            line_pitch: font_size.saturating_add(line_gap),
        }
    }

    /// Pixels of the cell above the baseline.
    pub fn ascent(&self) -> u32 {
        (u64::from(self.font_size) * 4 / 5) as u32
    }
}

/// Source Spleen cell for a target size.
fn spleen_source(font_size: u32) -> (&'static [u8], usize, usize) {
    match font_size {
        24.. => (&FONT_12X24[..], 12, 24),
        16..=23 => (&FONT_8X16[..], 8, 16),
        _ => (&FONT_6X12[..], 6, 12),
    }
}

/// Generate a glyph bitmap of `advance × font_size` pixels for `ch`.
///
/// Each byte is 0 (background) or 1 (ink). Whitespace is blank; characters
/// Spleen does not cover use a procedural fallback or a box outline.
/// Sizes above [`RenderConfig::MAX_FONT_SIZE`] produce an empty bitmap.
pub fn generate_glyph(metrics: &GlyphMetrics, ch: char) -> Vec<u8> {
    if metrics.font_size > RenderConfig::MAX_FONT_SIZE {
        return Vec::new();
    }
    let w = metrics.advance as usize;
    let h = metrics.font_size as usize;
    let mut glyph = vec![0u8; w * h];
    if w == 0 || h == 0 || ch.is_whitespace() {
        return glyph;
    }

    let (data, src_w, src_h) = spleen_source(metrics.font_size);
    let mut src_bitmap = vec![0u8; src_w * src_h];
    let mut found = false;

    if let Ok(mut spleen) = PSF2Font::new(data) {
        let utf8_bytes = ch.to_string();
        if let Some(spleen_glyph) = spleen.glyph_for_utf8(utf8_bytes.as_bytes()) {
            found = true;
            for (row_y, row) in spleen_glyph.enumerate() {
                for (col_x, on) in row.enumerate() {
                    if row_y < src_h && col_x < src_w {
                        src_bitmap[row_y * src_w + col_x] = u8::from(on);
                    }
                }
            }
        }
    }

    if found {
        scale_bitmap(&src_bitmap, src_w, src_h, &mut glyph, w, h);
    } else if let Some(fb) = fallback_glyph(ch, w, h) {
        glyph = fb;
    } else {
        outline(&mut glyph, w, h);
    }

    glyph
}

/// Scale a bitmap from src dimensions to dst dimensions using nearest neighbor.
fn scale_bitmap(
    src: &[u8],
    src_w: usize,
    src_h: usize,
    dst: &mut [u8],
    dst_w: usize,
    dst_h: usize,
) {
    for dy in 0..dst_h {
        let sy = dy * src_h / dst_h;
        for dx in 0..dst_w {
            let sx = dx * src_w / dst_w;
            if let (Some(&v), Some(out)) = (src.get(sy * src_w + sx), dst.get_mut(dy * dst_w + dx)) {
                *out = v;
            }
        }
    }
}

/// Set `[x1, x2) × [y1, y2)` to ink, clipped to the glyph.
fn fill_rect(g: &mut [u8], stride: usize, x1: usize, y1: usize, x2: usize, y2: usize) {
    let x2 = x2.min(stride);
    if x1 >= x2 {
        return;
    }
    for row in g.chunks_mut(stride).take(y2).skip(y1) {
        row[x1..x2].fill(1);
    }
}

/// One-pixel frame around the cell, drawn for unmapped characters.
fn outline(g: &mut [u8], w: usize, h: usize) {
    fill_rect(g, w, 0, 0, w, 1);
    fill_rect(g, w, 0, h - 1, w, h);
    fill_rect(g, w, 0, 0, 1, h);
    fill_rect(g, w, w - 1, 0, w, h);
}

/// Box-drawing and block characters common in ASCII art.
fn fallback_glyph(ch: char, w: usize, h: usize) -> Option<Vec<u8>> {
    let mut g = vec![0u8; w * h];
    // Stroke thickness scales with the cell
    let t = (w / 6).max(1);
    let (cx, cy) = (w / 2, h / 2);
    let (s1, s2) = (cx.saturating_sub(t / 2), cx.saturating_sub(t / 2) + t);
    let (t1, t2) = (cy.saturating_sub(t / 2), cy.saturating_sub(t / 2) + t);

    // (left, right, up, down) arms from the centre
    let arms = match ch {
        '\u{2500}' => (true, true, false, false),  // ─
        '\u{2502}' => (false, false, true, true),  // │
        '\u{250C}' => (false, true, false, true),  // ┌
        '\u{2510}' => (true, false, false, true),  // ┐
        '\u{2514}' => (false, true, true, false),  // └
        '\u{2518}' => (true, false, true, false),  // ┘
        '\u{251C}' => (false, true, true, true),   // ├
        '\u{2524}' => (true, false, true, true),   // ┤
        '\u{252C}' => (true, true, false, true),   // ┬
        '\u{2534}' => (true, true, true, false),   // ┴
        '\u{253C}' => (true, true, true, true),    // ┼
        '\u{2588}' => {
            // █
            fill_rect(&mut g, w, 0, 0, w, h);
            return Some(g);
        }
        '\u{2580}' => {
            // ▀
            fill_rect(&mut g, w, 0, 0, w, cy);
            return Some(g);
        }
        '\u{2584}' => {
            // ▄
            fill_rect(&mut g, w, 0, cy, w, h);
            return Some(g);
        }
        _ => return None,
    };

    let (left, right, up, down) = arms;
    if left {
        fill_rect(&mut g, w, 0, t1, s2, t2);
    }
    if right {
        fill_rect(&mut g, w, s1, t1, w, t2);
    }
    if up {
        fill_rect(&mut g, w, s1, 0, s2, t2);
    }
    if down {
        fill_rect(&mut g, w, s1, t1, s2, h);
    }
    Some(g)
}
