//! The 8-bit grayscale pixel buffer.
//!
//! An [`Image`] owns its dimensions, its maximum gray level (`maxval`,
//! the level representing pure white) and a contiguous row-major array of
//! `width * height` bytes.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - `x` is the column, `y` is the row
//! - Pixel `(x, y)` is stored at offset `y * width + x`
//!
//! # Contracts
//!
//! Out-of-range coordinates and rectangles are caller bugs and panic.
//! Only allocation can fail recoverably, reported as [`ImageError`].

mod index;
mod types;

use std::fmt;
use std::sync::Arc;

use image::{GrayImage, Luma};
use log::warn;

use crate::instrument::PixelObserver;

pub use index::pixel_index;
pub use types::{ImageError, PIX_MAX};

/// An in-memory 8-bit grayscale image.
#[derive(Clone)]
pub struct Image {
    width: usize,
    height: usize,
    maxval: u8,
    pixels: Vec<u8>,
    observer: Option<Arc<dyn PixelObserver>>,
}

impl Image {
    /// Create a new black image.
    ///
    /// # Arguments
    /// * `width`, `height` - Dimensions of the new image (may be zero)
    /// * `maxval` - Gray level of pure white, in `1..=255`
    ///
    /// # Errors
    /// Returns [`ImageError::Allocation`] if the pixel array cannot be
    /// obtained. Nothing is left allocated in that case.
    ///
    /// # Panics
    /// Panics if `maxval` is zero.
    pub fn new(width: usize, height: usize, maxval: u8) -> Result<Self, ImageError> {
        assert!(maxval > 0, "maxval must be in 1..={PIX_MAX}, got 0");

        let alloc_error = ImageError::Allocation { width, height };
        let len = width.checked_mul(height).ok_or_else(|| {
            warn!("{width}x{height} image size overflows");
            alloc_error.clone()
        })?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|e| {
            warn!("allocating {width}x{height} image failed: {e}");
            alloc_error
        })?;
        pixels.resize(len, 0);

        Ok(Self {
            width,
            height,
            maxval,
            pixels,
            observer: None,
        })
    }

    /// Create a black image with the same maxval and observer as `self`.
    pub(crate) fn blank_like(&self, width: usize, height: usize) -> Result<Self, ImageError> {
        let mut image = Self::new(width, height, self.maxval)?;
        image.observer = self.observer.clone();
        Ok(image)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gray level representing pure white.
    #[inline]
    pub fn maxval(&self) -> u8 {
        self.maxval
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Check if the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Borrow the row-major pixel array.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the image, returning its row-major pixel array.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    pub(crate) fn raw_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Overwrite every pixel from a row-major byte slice.
    ///
    /// # Panics
    /// Panics if `data.len()` differs from [`Image::pixel_count`].
    pub fn copy_from_slice(&mut self, data: &[u8]) {
        assert_eq!(
            data.len(),
            self.pixels.len(),
            "expected {} pixel bytes, got {}",
            self.pixels.len(),
            data.len()
        );
        self.pixels.copy_from_slice(data);
        self.record(data.len() as u64);
    }

    /// Attach an observer that is told about every pixel access.
    ///
    /// Images produced from this one by geometric transforms inherit it.
    pub fn attach_observer<O: PixelObserver + 'static>(&mut self, observer: O) {
        self.observer = Some(Arc::new(observer));
    }

    /// Remove the attached observer, if any.
    pub fn detach_observer(&mut self) {
        self.observer = None;
    }

    /// Check whether an observer is attached.
    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Report `accesses` pixel reads/writes to the observer.
    #[inline]
    pub(crate) fn record(&self, accesses: u64) {
        if let Some(observer) = &self.observer {
            observer.record(accesses);
        }
    }

    /// Check if pixel position `(x, y)` is inside the image.
    #[inline]
    pub fn valid_pos(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Check if the rectangle `[x, x+w) x [y, y+h)` lies completely inside
    /// the image.
    ///
    /// Corners may touch the far edges, so an empty rectangle anchored at
    /// `(width, height)` is valid while one anchored further out is not.
    pub fn valid_rect(&self, x: usize, y: usize, w: usize, h: usize) -> bool {
        let right = x.checked_add(w);
        let bottom = y.checked_add(h);
        matches!((right, bottom), (Some(r), Some(b)) if r <= self.width && b <= self.height)
    }

    /// Linear offset of pixel `(x, y)` in the pixel array.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        pixel_index(self.width, self.height, x, y)
    }

    /// Get the gray level at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the image.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u8 {
        assert!(
            self.valid_pos(x, y),
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        self.record(1);
        self.pixels[self.index(x, y)]
    }

    /// Set the gray level at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the image.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, level: u8) {
        assert!(
            self.valid_pos(x, y),
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        self.record(1);
        let i = self.index(x, y);
        self.pixels[i] = level;
    }

    /// Apply `f` to every pixel in place.
    pub(crate) fn map_in_place(&mut self, mut f: impl FnMut(u8) -> u8) {
        for p in self.pixels.iter_mut() {
            *p = f(*p);
        }
        self.record(2 * self.pixels.len() as u64);
    }

    /// Create an image from an `image::GrayImage`, with maxval 255.
    pub fn from_gray_image(img: &GrayImage) -> Result<Self, ImageError> {
        let (width, height) = img.dimensions();
        let mut image = Self::new(width as usize, height as usize, PIX_MAX)?;
        image.copy_from_slice(img.as_raw());
        Ok(image)
    }

    /// Convert to an `image::GrayImage` for use with the `image` crate.
    ///
    /// Levels are copied as-is; no rescaling to a 255 maxval is done.
    ///
    /// # Errors
    /// Returns [`ImageError::TooLarge`] if either dimension exceeds `u32::MAX`.
    pub fn to_gray_image(&self) -> Result<GrayImage, ImageError> {
        let too_large = || ImageError::TooLarge {
            width: self.width,
            height: self.height,
        };
        let width = u32::try_from(self.width).map_err(|_| too_large())?;
        let height = u32::try_from(self.height).map_err(|_| too_large())?;

        self.record(self.pixels.len() as u64);
        Ok(GrayImage::from_fn(width, height, |x, y| {
            Luma([self.pixels[self.index(x as usize, y as usize)]])
        }))
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("maxval", &self.maxval)
            .field("observed", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

/// Images are equal when their dimensions, maxval and pixels match.
impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.maxval == other.maxval
            && self.pixels == other.pixels
    }
}

impl Eq for Image {}
