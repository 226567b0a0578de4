//! Core types for the image buffer.

use thiserror::Error;

/// Largest gray level a single-byte pixel can hold.
pub const PIX_MAX: u8 = 255;

/// Error types for image buffer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// The pixel array could not be allocated.
    #[error("Out of memory allocating a {width}x{height} image")]
    Allocation { width: usize, height: usize },

    /// The dimensions do not fit the `u32` sizes of the `image` crate.
    #[error("{width}x{height} image exceeds u32 dimensions")]
    TooLarge { width: usize, height: usize },
}
