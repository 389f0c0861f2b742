//! # Rendering Module
//!
//! Pixel buffers and the operations that write DAT colours into them.
//!
//! ## Modules
//!
//! - [`canvas`]: Owned opaque RGBA8 raster and PNG encoding
//! - [`scale`]: Source extent → target raster scale factors
//! - [`composite`]: Direct overwrite and bilinear compositing
//!
//! ## Usage Example
//!
//! ```
//! use asciiraster::dat::parse_records;
//! use asciiraster::render::canvas::{Canvas, Rgb};
//! use asciiraster::render::composite::{self, OverlayMode};
//! use asciiraster::render::scale::ScaleFactors;
//!
//! let records = parse_records("0,0:255,0,0\n1,1:0,0,255\n");
//! let mut canvas = Canvas::new(8, 8, Rgb::WHITE);
//!
//! let scale = ScaleFactors::between(records.extent(), canvas.width(), canvas.height())?;
//! composite::composite(&mut canvas, &records, scale, OverlayMode::Tint);
//! # Ok::<(), asciiraster::RasterError>(())
//! ```

pub mod canvas;
pub mod composite;
pub mod scale;
