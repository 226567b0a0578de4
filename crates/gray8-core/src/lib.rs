//! gray8 Core - 8-bit grayscale image library
//!
//! This crate provides an in-memory grayscale pixel buffer and the
//! algorithms that read, transform, compose and search it: point
//! adjustments, lossless geometric transforms, paste/blend, exact
//! sub-image search, box blur, histograms and raw PGM (P5) I/O.
//!
//! # Ownership
//!
//! Transforms that return a new [`Image`] never modify their input. All
//! other operations modify the image they are given in place.

pub mod adjustments;
pub mod blur;
pub mod buffer;
pub mod histogram;
pub mod instrument;
pub mod pgm;
pub mod search;
pub mod transform;

pub use adjustments::{brighten, negative, threshold};
pub use blur::blur;
pub use buffer::{pixel_index, Image, ImageError, PIX_MAX};
pub use histogram::{compute_histogram, image_stats};
pub use instrument::{AccessCounter, InstrumentationReport, PixelObserver};
pub use pgm::PgmError;
pub use search::{locate_sub_image, match_sub_image};
pub use transform::{blend, crop, mirror, paste, rotate};

/// Minimum and maximum gray levels of an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageStats {
    /// Darkest level present
    pub min: u8,
    /// Brightest level present
    pub max: u8,
}

impl ImageStats {
    /// Width of the occupied level range.
    pub fn range(&self) -> u8 {
        self.max.saturating_sub(self.min)
    }
}

/// Gray-level histogram of an image
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Pixel count per gray level (256 bins)
    pub bins: [u32; 256],
}

impl Default for Histogram {
    fn default() -> Self {
        Self { bins: [0; 256] }
    }
}

impl Histogram {
    /// Create a new empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest bin count, for normalization
    pub fn max_value(&self) -> u32 {
        *self.bins.iter().max().unwrap_or(&0)
    }

    /// Total number of pixels counted
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&b| b as u64).sum()
    }

    /// Check for highlight clipping (pixels at `maxval`)
    pub fn has_highlight_clipping(&self, maxval: u8) -> bool {
        self.bins[maxval as usize] > 0
    }

    /// Check for shadow clipping (pixels at 0)
    pub fn has_shadow_clipping(&self) -> bool {
        self.bins[0] > 0
    }
}
