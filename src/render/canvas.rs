//! # Canvas
//!
//! An owned RGBA8 pixel buffer. Alpha is always fully opaque: every write
//! goes through [`Rgb`], so the buffer only ever carries 8-bit RGB colour.

use image::{ImageEncoder, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::{RasterError, Result};

/// An 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn from_channels([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }

    #[inline]
    fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

/// A `width × height` opaque raster.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Largest pixel count a conversion may allocate (1 GiB of RGBA8).
    pub const MAX_PIXELS: u64 = 1 << 28;

    /// Allocate a canvas filled with `background`.
    ///
    /// Zero dimensions are clamped to 1 so the result is always renderable.
    ///
    /// # Panics
    ///
    /// If the buffer size overflows `usize`. Conversions go through
    /// [`Canvas::try_new`] instead.
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let image = RgbaImage::from_pixel(width.max(1), height.max(1), background.to_rgba());
        Self { image }
    }

    /// [`Canvas::new`] that refuses sizes above [`Canvas::MAX_PIXELS`]
    /// with [`RasterError::CanvasTooLarge`] instead of allocating.
    pub fn try_new(width: u32, height: u32, background: Rgb) -> Result<Self> {
        let (w, h) = (width.max(1), height.max(1));
        let pixels = u64::from(w) * u64::from(h);
        let fits = pixels <= Self::MAX_PIXELS
            && usize::try_from(pixels)
                .ok()
                .and_then(|p| p.checked_mul(4))
                .is_some();
        if !fits {
            return Err(RasterError::CanvasTooLarge { width, height });
        }
        Ok(Self::new(w, h, background))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height()
    }

    /// Colour at (x, y), or `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if !self.contains(x, y) {
            return None;
        }
        let Rgba([r, g, b, _]) = *self.image.get_pixel(x, y);
        Some(Rgb::new(r, g, b))
    }

    /// Write a pixel. Returns `false` (and writes nothing) outside the canvas.
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.image.put_pixel(x, y, color.to_rgba());
        true
    }

    /// Signed-coordinate variant of [`Canvas::set`] used by glyph drawing.
    pub(crate) fn set_signed(&mut self, x: i64, y: i64, color: Rgb) -> bool {
        if x < 0 || y < 0 || x > u32::MAX as i64 || y > u32::MAX as i64 {
            return false;
        }
        self.set(x as u32, y as u32, color)
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Encode as a lossless RGBA8 PNG.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut png_bytes = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
        encoder
            .write_image(
                self.image.as_raw(),
                self.width(),
                self.height(),
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e: image::ImageError| RasterError::Image(e.to_string()))?;
        Ok(png_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_filled_and_opaque() {
        let canvas = Canvas::new(3, 2, Rgb::new(1, 2, 3));
        assert_eq!(canvas.dimensions(), (3, 2));
        for px in canvas.as_raw().chunks(4) {
            assert_eq!(px, &[1, 2, 3, 255]);
        }
    }

    #[test]
    fn test_zero_size_is_clamped() {
        let canvas = Canvas::new(0, 0, Rgb::WHITE);
        assert_eq!(canvas.dimensions(), (1, 1));
    }

    #[test]
    fn test_try_new_rejects_oversized_canvas() {
        assert!(matches!(
            Canvas::try_new(4_000_000_001, 4_000_000_001, Rgb::WHITE),
            Err(RasterError::CanvasTooLarge { .. })
        ));
        assert!(matches!(
            Canvas::try_new(100_000, 100_000, Rgb::WHITE),
            Err(RasterError::CanvasTooLarge {
                width: 100_000,
                height: 100_000
            })
        ));
        assert!(Canvas::try_new(u32::MAX, 1, Rgb::WHITE).is_err());
    }

    #[test]
    fn test_try_new_accepts_normal_sizes() {
        let canvas = Canvas::try_new(640, 480, Rgb::BLACK).unwrap();
        assert_eq!(canvas.dimensions(), (640, 480));
        assert_eq!(Canvas::try_new(0, 0, Rgb::WHITE).unwrap().dimensions(), (1, 1));
    }

    #[test]
    fn test_set_out_of_bounds_is_ignored() {
        let mut canvas = Canvas::new(2, 2, Rgb::WHITE);
        assert!(!canvas.set(2, 0, Rgb::BLACK));
        assert!(!canvas.set_signed(-1, 0, Rgb::BLACK));
        assert!(canvas.set(1, 1, Rgb::BLACK));
        assert_eq!(canvas.get(1, 1), Some(Rgb::BLACK));
        assert_eq!(canvas.get(5, 5), None);
    }

    #[test]
    fn test_png_roundtrip_dimensions() {
        let canvas = Canvas::new(4, 3, Rgb::WHITE);
        let png = canvas.to_png().unwrap();
        assert_eq!(&png[1..4], b"PNG");
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 4);
        assert_eq!(decoded.height(), 3);
    }
}
