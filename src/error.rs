//! # Error Types
//!
//! This module defines error types used throughout the asciiraster library.
//!
//! Only [`RasterError::MalformedRecord`] is recoverable: the DAT parser keeps
//! a `SkippedLine` per dropped line (convertible to this variant) and keeps
//! going. Every other variant aborts the conversion that produced it.

use thiserror::Error;

/// Main error type for asciiraster operations
#[derive(Debug, Error)]
pub enum RasterError {
    /// Nothing usable to size a canvas from (no text lines, no valid records)
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A DAT line that does not match `X,Y:R,G,B` (1-based line number)
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// A scale was requested from a zero-sized source extent
    #[error("Invalid extent {width}x{height}: nothing to scale from")]
    InvalidExtent { width: u32, height: u32 },

    /// Requested canvas exceeds the pixel budget or the addressable buffer size
    #[error("Canvas {width}x{height} is too large to allocate")]
    CanvasTooLarge { width: u32, height: u32 },

    /// Render configuration rejected by validation or failed to load
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RasterError {
    /// Whether the error only drops a single record instead of the whole conversion.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RasterError::MalformedRecord { .. })
    }
}

/// Result alias used by every fallible function in the crate.
pub type Result<T> = std::result::Result<T, RasterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_malformed_record_is_recoverable() {
        let malformed = RasterError::MalformedRecord {
            line: 2,
            reason: "missing ':'".to_string(),
        };
        assert!(malformed.is_recoverable());
        assert!(!RasterError::EmptyInput("no records".into()).is_recoverable());
        assert!(
            !RasterError::InvalidExtent {
                width: 0,
                height: 3
            }
            .is_recoverable()
        );
    }

    #[test]
    fn test_display_includes_line_number() {
        let err = RasterError::MalformedRecord {
            line: 7,
            reason: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed record on line 7: bad");
    }
}
