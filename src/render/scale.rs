//! # Coordinate Rescaling
//!
//! Linear mapping from a sparse record extent onto a raster:
//!
//! ```text
//! scale_x = target_width  / source_width
//! scale_y = target_height / source_height
//! ```

use crate::dat::Extent;
use crate::error::{RasterError, Result};

/// Per-axis scale from source extent to target raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub x: f32,
    pub y: f32,
}

impl ScaleFactors {
    pub const IDENTITY: Self = Self { x: 1.0, y: 1.0 };

    /// Scale factors mapping `source` onto a `target_width × target_height` raster.
    ///
    /// Fails with [`RasterError::InvalidExtent`] when either source dimension is zero
    /// or the target is empty.
    pub fn between(source: Extent, target_width: u32, target_height: u32) -> Result<Self> {
        if source.is_empty() || target_width == 0 || target_height == 0 {
            return Err(RasterError::InvalidExtent {
                width: source.width,
                height: source.height,
            });
        }

        if source.width == target_width && source.height == target_height {
            return Ok(Self::IDENTITY);
        }

        Ok(Self {
            x: target_width as f32 / source.width as f32,
            y: target_height as f32 / source.height as f32,
        })
    }

    /// Exact 1:1 mapping on both axes.
    #[allow(clippy::float_cmp)]
    pub fn is_identity(&self) -> bool {
        self.x == 1.0 && self.y == 1.0
    }

    /// Map a source coordinate into target space (unrounded).
    #[inline]
    pub fn apply(&self, x: u32, y: u32) -> (f32, f32) {
        (x as f32 * self.x, y as f32 * self.y)
    }
}
