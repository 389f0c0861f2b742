//! # asciiraster - Text and Pixel DAT to PNG
//!
//! asciiraster turns two kinds of text files into raster images:
//!
//! - **Plain text**: monospace glyphs on a white canvas sized to fit the text
//! - **Pixel DAT**: sparse `X,Y:R,G,B` records rebuilt into a dense image
//! - **Overlay**: DAT colours scaled and bilinearly composited onto rendered text
//!
//! ## Quick Start
//!
//! ```
//! use asciiraster::{Converter, TextDocument};
//! use asciiraster::dat::parse_records;
//!
//! let converter = Converter::default();
//!
//! let doc = TextDocument::from_text("+--+\n|  |\n+--+\n");
//! let records = parse_records("0,0:255,0,0\n3,2:0,0,255\n");
//!
//! let canvas = converter.render_text_with_color_overlay(&doc, &records)?;
//! let png = canvas.to_png()?;
//! assert!(!png.is_empty());
//! # Ok::<(), asciiraster::RasterError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`text`] | Text documents, layout and glyph rasterization |
//! | [`dat`] | Pixel DAT records and parser |
//! | [`render`] | Canvas, scaling and compositing |
//! | [`pipeline`] | The three conversion operations |
//! | [`output`] | PNG writing and output filenames |
//! | [`config`] | Render configuration |
//! | [`error`] | Error types |

pub mod config;
pub mod dat;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod text;

// Re-exports for convenience
pub use config::RenderConfig;
pub use error::RasterError;
pub use pipeline::Converter;
pub use render::canvas::{Canvas, Rgb};
pub use text::TextDocument;
