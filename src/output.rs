//! # PNG Output
//!
//! Encodes a finished canvas and writes it under a timestamped name:
//!
//! ```text
//! ascii_20260117_093012.png
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};

use crate::error::Result;
use crate::render::canvas::Canvas;

/// Filename prefix for generated images.
pub const FILENAME_PREFIX: &str = "ascii_";

/// `ascii_<yyyyMMdd_HHmmss>.png` for the given instant.
pub fn filename_for<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}{}.png", FILENAME_PREFIX, at.format("%Y%m%d_%H%M%S"))
}

/// Filename for the current local time.
pub fn timestamped_filename() -> String {
    filename_for(&Local::now())
}

/// Full path for a new image in `dir`.
pub fn timestamped_path(dir: &Path) -> PathBuf {
    dir.join(timestamped_filename())
}

/// Encode `canvas` to PNG and write it to `path`.
///
/// The image is encoded in memory first, so an encoding failure never leaves
/// a file behind.
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let png = canvas.to_png()?;
    std::fs::write(path, &png)?;
    log::debug!(
        "wrote {}x{} PNG ({} bytes) to {}",
        canvas.width(),
        canvas.height(),
        png.len(),
        path.display()
    );
    Ok(())
}
