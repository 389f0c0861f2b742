//! # Pixel Compositing
//!
//! Writes DAT records into a canvas in one of two ways:
//!
//! | Scale | Path | Output pixel |
//! |-------|------|--------------|
//! | exactly 1:1 | [`overwrite`] | the record's literal colour |
//! | anything else | [`bilinear`] | bilinear sample of the existing canvas |
//!
//! ## Bilinear Sampling
//!
//! For a record at `(x, y)` the scaled position is `(nx, ny) = (x * sx, y * sy)`.
//! Four corners around it are read and blended by the fractional offsets:
//!
//! ```text
//!   (x1,y1) ──── (x2,y1)        x1 = floor(nx), x2 = min(x1 + 1, width - 1)
//!      │    ·(nx,ny)│           y1 = floor(ny), y2 = min(y1 + 1, height - 1)
//!   (x1,y2) ──── (x2,y2)        dx = nx - x1,   dy = ny - y1
//!
//! c = c11(1-dx)(1-dy) + c21·dx(1-dy) + c12(1-dx)dy + c22·dx·dy
//! ```
//!
//! Corners come from a snapshot of the canvas taken before any record is
//! written, so the output does not depend on record order. The result lands
//! at the rounded scaled position.

use serde::{Deserialize, Serialize};

use super::canvas::{Canvas, Rgb};
use super::scale::ScaleFactors;
use crate::dat::RecordSet;

/// What a scaled overlay writes for each record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayMode {
    /// The bilinear sample of the base canvas; the record colour is not used.
    #[default]
    Sample,
    /// Per-channel mean of the bilinear sample and the record colour.
    Tint,
}

/// Write every in-bounds record's colour at its exact pixel.
///
/// Returns the number of pixels written.
pub fn overwrite(canvas: &mut Canvas, records: &RecordSet) -> usize {
    let mut written = 0;
    for record in records.iter() {
        if canvas.set(record.x, record.y, record.color) {
            written += 1;
        }
    }
    let dropped = records.len() - written;
    if dropped > 0 {
        log::debug!("overwrite: dropped {} out-of-bounds records", dropped);
    }
    written
}

/// The four sample corners for a scaled position, clamped to the canvas.
///
/// Order: `(x1,y1), (x2,y1), (x1,y2), (x2,y2)`.
pub fn sample_corners(width: u32, height: u32, nx: f32, ny: f32) -> [(u32, u32); 4] {
    let max_x = width.saturating_sub(1);
    let max_y = height.saturating_sub(1);
    let x1 = (nx.max(0.0).floor() as u32).min(max_x);
    let y1 = (ny.max(0.0).floor() as u32).min(max_y);
    let x2 = (x1 + 1).min(max_x);
    let y2 = (y1 + 1).min(max_y);
    [(x1, y1), (x2, y1), (x1, y2), (x2, y2)]
}

/// Bilinearly sample `canvas` at a fractional position.
pub fn bilinear_sample(canvas: &Canvas, nx: f32, ny: f32) -> Rgb {
    let corners = sample_corners(canvas.width(), canvas.height(), nx, ny);
    let (x1, y1) = corners[0];
    let dx = (nx - x1 as f32).clamp(0.0, 1.0);
    let dy = (ny - y1 as f32).clamp(0.0, 1.0);

    let weights = [
        (1.0 - dx) * (1.0 - dy),
        dx * (1.0 - dy),
        (1.0 - dx) * dy,
        dx * dy,
    ];

    let mut acc = [0.0f32; 3];
    for (&(x, y), weight) in corners.iter().zip(weights) {
        let Some(color) = canvas.get(x, y) else {
            continue;
        };
        for (sum, channel) in acc.iter_mut().zip(color.channels()) {
            *sum += channel as f32 * weight;
        }
    }

    Rgb::from_channels(acc.map(|v| v.round().clamp(0.0, 255.0) as u8))
}

/// Composite records onto `canvas` through the scaled bilinear path.
///
/// Returns the number of pixels written.
pub fn bilinear(
    canvas: &mut Canvas,
    records: &RecordSet,
    scale: ScaleFactors,
    mode: OverlayMode,
) -> usize {
    let base = canvas.clone();
    let max_x = canvas.width() - 1;
    let max_y = canvas.height() - 1;
    let mut written = 0;

    for record in records.iter() {
        let (nx, ny) = scale.apply(record.x, record.y);
        let sampled = bilinear_sample(&base, nx, ny);

        let color = match mode {
            OverlayMode::Sample => sampled,
            OverlayMode::Tint => mean(sampled, record.color),
        };

        let tx = (nx.round() as u32).min(max_x);
        let ty = (ny.round() as u32).min(max_y);
        if canvas.set(tx, ty, color) {
            written += 1;
        }
    }
    written
}

/// Pick the direct path for an exact 1:1 scale, bilinear otherwise.
pub fn composite(
    canvas: &mut Canvas,
    records: &RecordSet,
    scale: ScaleFactors,
    mode: OverlayMode,
) -> usize {
    if scale.is_identity() {
        log::debug!("composite: extents match, direct overwrite");
        overwrite(canvas, records)
    } else {
        log::debug!(
            "composite: bilinear ({:?}) at scale {:.3}x{:.3}",
            mode,
            scale.x,
            scale.y
        );
        bilinear(canvas, records, scale, mode)
    }
}

fn mean(a: Rgb, b: Rgb) -> Rgb {
    let [ar, ag, ab] = a.channels().map(u16::from);
    let [br, bg, bb] = b.channels().map(u16::from);
    Rgb::new(
        ((ar + br + 1) / 2) as u8,
        ((ag + bg + 1) / 2) as u8,
        ((ab + bb + 1) / 2) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dat::{ColorRecord, Extent};

    fn records(items: &[(u32, u32, Rgb)]) -> RecordSet {
        items
            .iter()
            .map(|&(x, y, c)| ColorRecord::new(x, y, c))
            .collect()
    }

    #[test]
    fn test_overwrite_drops_out_of_bounds() {
        let mut canvas = Canvas::new(2, 2, Rgb::WHITE);
        let set = records(&[(1, 1, Rgb::BLACK), (5, 0, Rgb::BLACK)]);
        assert_eq!(overwrite(&mut canvas, &set), 1);
        assert_eq!(canvas.get(1, 1), Some(Rgb::BLACK));
    }

    #[test]
    fn test_sample_corners_clamped_at_last_pixel() {
        let corners = sample_corners(10, 5, 9.7, 4.9);
        for (x, y) in corners {
            assert!(x <= 9 && y <= 4);
        }
        assert_eq!(corners, [(9, 4), (9, 4), (9, 4), (9, 4)]);
    }

    #[test]
    fn test_sample_corners_within_bounds_grid() {
        let (w, h) = (7u32, 3u32);
        let mut f = 0.0f32;
        while f < 12.0 {
            for (x, y) in sample_corners(w, h, f, f * 0.5) {
                assert!(x < w && y < h, "corner ({}, {}) out of bounds", x, y);
            }
            f += 0.37;
        }
    }

    #[test]
    fn test_bilinear_sample_midpoint() {
        let mut canvas = Canvas::new(2, 1, Rgb::BLACK);
        canvas.set(1, 0, Rgb::new(200, 100, 50));
        assert_eq!(bilinear_sample(&canvas, 0.5, 0.0), Rgb::new(100, 50, 25));
        assert_eq!(bilinear_sample(&canvas, 0.0, 0.0), Rgb::BLACK);
    }

    #[test]
    fn test_bilinear_sample_weights_all_four_corners() {
        let mut canvas = Canvas::new(2, 2, Rgb::BLACK);
        canvas.set(0, 0, Rgb::new(100, 0, 0)); // c11
        canvas.set(1, 0, Rgb::new(0, 200, 0)); // c21
        canvas.set(0, 1, Rgb::new(0, 0, 40)); // c12
        canvas.set(1, 1, Rgb::new(80, 80, 80)); // c22

        // dx = 0.25, dy = 0.75 → weights 0.1875, 0.0625, 0.5625, 0.1875
        // r = 100 * 0.1875 + 80 * 0.1875             = 33.75 → 34
        // g = 200 * 0.0625 + 80 * 0.1875             = 27.5  → 28
        // b =  40 * 0.5625 + 80 * 0.1875             = 37.5  → 38
        assert_eq!(bilinear_sample(&canvas, 0.25, 0.75), Rgb::new(34, 28, 38));

        // Transposed position swaps the roles of c21 and c12
        // r = 100 * 0.1875 + 80 * 0.1875             = 33.75 → 34
        // g = 200 * 0.5625 + 80 * 0.1875             = 127.5 → 128
        // b =  40 * 0.0625 + 80 * 0.1875             = 17.5  → 18
        assert_eq!(bilinear_sample(&canvas, 0.75, 0.25), Rgb::new(34, 128, 18));

        assert_eq!(bilinear_sample(&canvas, 1.0, 1.0), Rgb::new(80, 80, 80));
    }

    #[test]
    fn test_bilinear_writes_interpolated_value_at_rounded_position() {
        let mut canvas = Canvas::new(4, 4, Rgb::WHITE);
        canvas.set(1, 2, Rgb::BLACK);
        canvas.set(1, 3, Rgb::BLACK);
        // Record (1, 1) at scale (1.5, 2.0) → (1.5, 2.0): halfway between black and white
        let set = records(&[(1, 1, Rgb::new(255, 0, 0))]);
        let scale = ScaleFactors { x: 1.5, y: 2.0 };
        assert_eq!(bilinear(&mut canvas, &set, scale, OverlayMode::Sample), 1);
        assert_eq!(canvas.get(2, 2), Some(Rgb::new(128, 128, 128)));
    }

    #[test]
    fn test_bilinear_sample_mode_ignores_record_color() {
        let mut canvas = Canvas::new(4, 4, Rgb::WHITE);
        let set = records(&[(1, 1, Rgb::new(255, 0, 0))]);
        let scale = ScaleFactors::between(Extent::new(2, 2), 4, 4).unwrap();
        bilinear(&mut canvas, &set, scale, OverlayMode::Sample);
        assert_eq!(canvas.get(2, 2), Some(Rgb::WHITE));
    }

    #[test]
    fn test_tint_mode_blends_record_color() {
        let mut canvas = Canvas::new(4, 4, Rgb::WHITE);
        let set = records(&[(1, 1, Rgb::new(255, 0, 0))]);
        let scale = ScaleFactors::between(Extent::new(2, 2), 4, 4).unwrap();
        bilinear(&mut canvas, &set, scale, OverlayMode::Tint);
        assert_eq!(canvas.get(2, 2), Some(Rgb::new(255, 128, 128)));
    }

    #[test]
    fn test_bilinear_reads_snapshot_not_written_pixels() {
        // Left half black, right half white; scale 2x
        let mut canvas = Canvas::new(4, 1, Rgb::WHITE);
        canvas.set(0, 0, Rgb::BLACK);
        canvas.set(1, 0, Rgb::BLACK);
        let set = records(&[(0, 0, Rgb::WHITE), (1, 0, Rgb::WHITE)]);
        let scale = ScaleFactors { x: 2.0, y: 1.0 };

        let before = canvas.clone();
        bilinear(&mut canvas, &set, scale, OverlayMode::Sample);
        // Record (1,0) → (2,0) samples the original white pixel at (2,0)
        assert_eq!(canvas.get(2, 0), before.get(2, 0));
        assert_eq!(canvas.get(0, 0), Some(Rgb::BLACK));
    }

    #[test]
    fn test_downscale_writes_stay_in_bounds() {
        let mut canvas = Canvas::new(3, 3, Rgb::WHITE);
        let set = records(&[(9, 9, Rgb::BLACK), (0, 0, Rgb::BLACK)]);
        let scale = ScaleFactors::between(Extent::new(10, 10), 3, 3).unwrap();
        assert_eq!(bilinear(&mut canvas, &set, scale, OverlayMode::Sample), 2);
    }

    #[test]
    fn test_composite_identity_uses_literal_colors() {
        let mut canvas = Canvas::new(2, 2, Rgb::WHITE);
        let set = records(&[(0, 0, Rgb::new(1, 2, 3))]);
        composite(&mut canvas, &set, ScaleFactors::IDENTITY, OverlayMode::Sample);
        assert_eq!(canvas.get(0, 0), Some(Rgb::new(1, 2, 3)));
    }
}
