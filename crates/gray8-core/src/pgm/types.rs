//! Error type for PGM reading and writing.

use thiserror::Error;

use crate::buffer::ImageError;

/// Errors that can occur while loading or saving a PGM file.
///
/// Header checks run in file order and the first failing one is reported.
#[derive(Debug, Error)]
pub enum PgmError {
    /// The file could not be opened or created.
    #[error("Open failed: {0}")]
    Open(String),

    /// The magic number is not `P5`.
    #[error("Invalid file format")]
    InvalidFormat,

    /// The width token is missing, negative or not a number.
    #[error("Invalid width")]
    InvalidWidth,

    /// The height token is missing, negative or not a number.
    #[error("Invalid height")]
    InvalidHeight,

    /// The maxval token is missing or outside `1..=255`.
    #[error("Invalid maxval")]
    InvalidMaxval,

    /// The byte after maxval is not whitespace.
    #[error("Whitespace expected")]
    WhitespaceExpected,

    /// Fewer pixel bytes than `width * height` were present.
    #[error("Reading pixels: expected {expected} bytes, got {actual}")]
    TruncatedPixels { expected: usize, actual: usize },

    /// The image buffer could not be allocated.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Writing the file failed.
    #[error("Writing failed: {0}")]
    Write(String),
}
