//! # Render Configuration
//!
//! Layout constants and colours shared by every conversion.
//!
//! ## Layout
//!
//! ```text
//! ┌─ left_margin (10) ───────────────────────────┐
//! │    line 1 ........................ baseline = line_pitch
//! │    line 2 ........................ baseline = 2 * line_pitch
//! │                                              │ ← margin - left_margin
//! └──────────────────────────────────────────────┘
//!
//! line_pitch = font_size + line_gap   (40 + 10 = 50)
//! width      = widest line + margin   (margin = 20)
//! height     = lines * line_pitch + margin
//! ```
//!
//! ## Usage
//!
//! ```
//! use asciiraster::config::RenderConfig;
//!
//! let config = RenderConfig::DEFAULT;
//! assert_eq!(config.line_pitch(), 50);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RasterError, Result};
use crate::render::canvas::Rgb;
use crate::render::composite::OverlayMode;
use crate::text::font::GlyphMetrics;

/// # Render Configuration
///
/// Can be loaded from JSON; missing fields fall back to [`RenderConfig::DEFAULT`].
///
/// ```json
/// { "font_size": 24, "background": { "r": 0, "g": 0, "b": 0 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Glyph cell height in pixels
    pub font_size: u32,

    /// Extra vertical space between consecutive baselines
    pub line_gap: u32,

    /// Total margin added to each canvas dimension
    pub margin: u32,

    /// X offset of every line's first glyph
    pub left_margin: u32,

    /// Canvas fill colour
    pub background: Rgb,

    /// Glyph colour
    pub ink: Rgb,

    /// How a scaled DAT overlay colours the text canvas
    pub overlay_mode: OverlayMode,
}

impl RenderConfig {
    /// 40px monospace on white, 10px line gap, 20px margin.
    pub const DEFAULT: Self = Self {
        font_size: 40,
        line_gap: 10,
        margin: 20,
        left_margin: 10,
        background: Rgb::WHITE,
        ink: Rgb::BLACK,
        overlay_mode: OverlayMode::Sample,
    };

    /// Largest accepted glyph cell height.
    pub const MAX_FONT_SIZE: u32 = 1024;

    /// Distance between consecutive baselines (saturating).
    #[inline]
    pub fn line_pitch(&self) -> u32 {
        self.font_size.saturating_add(self.line_gap)
    }

    /// Glyph metrics for the configured font size.
    pub fn glyph_metrics(&self) -> GlyphMetrics {
        GlyphMetrics::for_size(self.font_size, self.line_gap)
    }

    /// Reject configurations that cannot produce a renderable layout.
    pub fn validate(&self) -> Result<()> {
        if self.font_size > Self::MAX_FONT_SIZE {
            return Err(RasterError::InvalidConfig(format!(
                "font_size {} exceeds maximum {}",
                self.font_size,
                Self::MAX_FONT_SIZE
            )));
        }
        let Some(pitch) = self.font_size.checked_add(self.line_gap) else {
            return Err(RasterError::InvalidConfig(
                "font_size + line_gap overflows".to_string(),
            ));
        };
        if pitch == 0 {
            return Err(RasterError::InvalidConfig(
                "font_size + line_gap must be greater than zero".to_string(),
            ));
        }
        if self.left_margin > self.margin {
            return Err(RasterError::InvalidConfig(format!(
                "left_margin {} exceeds total margin {}",
                self.left_margin, self.margin
            )));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Parse a configuration from JSON text and validate it.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| RasterError::InvalidConfig(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
