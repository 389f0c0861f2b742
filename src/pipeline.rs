//! # Conversion Pipeline
//!
//! Three independent conversions, each producing a fresh [`Canvas`]:
//!
//! | Operation | Input | Canvas size |
//! |-----------|-------|-------------|
//! | [`Converter::render_text`] | text | text layout |
//! | [`Converter::reconstruct_from_records`] | DAT | record extent |
//! | [`Converter::render_text_with_color_overlay`] | text + DAT | text layout |
//!
//! A conversion either returns a finished canvas or an error; no partial
//! raster escapes on failure.
//!
//! ## Example
//!
//! ```
//! use asciiraster::{Converter, TextDocument};
//! use asciiraster::dat::parse_records;
//!
//! let converter = Converter::default();
//! let doc = TextDocument::from_text("AB\nC\n");
//! let canvas = converter.render_text(&doc)?;
//! assert_eq!(canvas.height(), 2 * 50 + 20);
//!
//! let records = parse_records("0,0:255,0,0\n1,0:0,255,0\n0,1:0,0,255\n");
//! let exact = converter.reconstruct_from_records(&records)?;
//! assert_eq!(exact.dimensions(), (2, 2));
//! # Ok::<(), asciiraster::RasterError>(())
//! ```

use std::io::{BufReader, Read};

use crate::config::RenderConfig;
use crate::dat::{self, RecordSet};
use crate::error::{RasterError, Result};
use crate::render::canvas::Canvas;
use crate::render::composite;
use crate::render::scale::ScaleFactors;
use crate::text::{self, TextDocument};

/// Runs conversions under one [`RenderConfig`].
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: RenderConfig,
}

impl Converter {
    /// Create a converter, rejecting configurations with a zero line pitch.
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Text → layout → glyph raster.
    ///
    /// Degenerate layouts (an empty document with no margin) are clamped to 1×1.
    pub fn render_text(&self, document: &TextDocument) -> Result<Canvas> {
        self.config.validate()?;
        let layout = text::layout(document, &self.config);
        text::rasterize(document, &layout, &self.config)
    }

    /// DAT records → canvas of exactly the records' extent, every record written 1:1.
    pub fn reconstruct_from_records(&self, records: &RecordSet) -> Result<Canvas> {
        if records.is_empty() {
            return Err(RasterError::EmptyInput(
                "no valid DAT records to size the canvas from".to_string(),
            ));
        }
        let extent = records.extent();
        let mut canvas = Canvas::try_new(extent.width, extent.height, self.config.background)?;
        composite::overwrite(&mut canvas, records);
        log::debug!(
            "reconstructed {} records onto {}x{}",
            records.len(),
            extent.width,
            extent.height
        );
        Ok(canvas)
    }

    /// Text raster with DAT colours composited over it, scaled from the
    /// records' extent to the text canvas.
    pub fn render_text_with_color_overlay(
        &self,
        document: &TextDocument,
        records: &RecordSet,
    ) -> Result<Canvas> {
        if document.is_empty() {
            return Err(RasterError::EmptyInput("text document has no lines".to_string()));
        }
        if records.is_empty() {
            return Err(RasterError::EmptyInput(
                "no valid DAT records to overlay".to_string(),
            ));
        }

        let mut canvas = self.render_text(document)?;
        let scale = ScaleFactors::between(records.extent(), canvas.width(), canvas.height())?;
        composite::composite(&mut canvas, records, scale, self.config.overlay_mode);
        Ok(canvas)
    }

    /// [`Converter::render_text`] over a UTF-8 text stream.
    pub fn render_text_from_reader<R: Read>(&self, text: R) -> Result<Canvas> {
        self.render_text(&TextDocument::from_reader(text)?)
    }

    /// [`Converter::reconstruct_from_records`] over a DAT stream.
    pub fn reconstruct_from_reader<R: Read>(&self, dat: R) -> Result<Canvas> {
        let records = dat::parse_reader(BufReader::new(dat))?;
        self.reconstruct_from_records(&records)
    }

    /// [`Converter::render_text_with_color_overlay`] over text and DAT streams.
    pub fn render_overlay_from_readers<T: Read, D: Read>(&self, text: T, dat: D) -> Result<Canvas> {
        let document = TextDocument::from_reader(text)?;
        let records = dat::parse_reader(BufReader::new(dat))?;
        self.render_text_with_color_overlay(&document, &records)
    }
}
