//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core gray8
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use gray8_core::Image;
use wasm_bindgen::prelude::*;

/// Convert any displayable error into a JavaScript string error.
pub(crate) fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A grayscale image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy
/// is made to JavaScript memory as a `Uint8Array`.
///
/// The `free()` method can be called to explicitly release WASM memory, but
/// this is optional as wasm-bindgen's finalizer will handle cleanup
/// automatically.
#[wasm_bindgen]
pub struct JsImage {
    inner: Image,
}

#[wasm_bindgen]
impl JsImage {
    /// Create a new black image.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `maxval` - Gray level of pure white (1-255)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, maxval: u8) -> Result<JsImage, JsValue> {
        if maxval == 0 {
            return Err(JsValue::from_str("maxval must be between 1 and 255"));
        }
        Image::new(width as usize, height as usize, maxval)
            .map(Self::from_image)
            .map_err(js_error)
    }

    /// Create an image from row-major gray levels.
    pub fn from_pixels(
        width: u32,
        height: u32,
        maxval: u8,
        pixels: &[u8],
    ) -> Result<JsImage, JsValue> {
        let Some(expected) = (width as usize).checked_mul(height as usize) else {
            return Err(JsValue::from_str(&format!(
                "{width}x{height} image is too large"
            )));
        };
        if pixels.len() != expected {
            return Err(JsValue::from_str(&format!(
                "expected {expected} pixel bytes, got {}",
                pixels.len()
            )));
        }
        let mut image = Self::new(width, height, maxval)?;
        image.inner.copy_from_slice(pixels);
        Ok(image)
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width() as u32
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height() as u32
    }

    /// Get the gray level of pure white
    #[wasm_bindgen(getter)]
    pub fn maxval(&self) -> u8 {
        self.inner.maxval()
    }

    /// Get the number of bytes in the pixel buffer (width * height)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixel_count()
    }

    /// Check if pixel position (x, y) is inside the image.
    pub fn valid_pos(&self, x: u32, y: u32) -> bool {
        self.inner.valid_pos(x as usize, y as usize)
    }

    /// Check if the rectangle (x, y, w, h) is completely inside the image.
    pub fn valid_rect(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        self.inner
            .valid_rect(x as usize, y as usize, w as usize, h as usize)
    }

    /// Get the gray level at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<u8, JsValue> {
        self.check_pos(x, y)?;
        Ok(self.inner.get_pixel(x as usize, y as usize))
    }

    /// Set the gray level at (x, y).
    pub fn set_pixel(&mut self, x: u32, y: u32, level: u8) -> Result<(), JsValue> {
        self.check_pos(x, y)?;
        self.inner.set_pixel(x as usize, y as usize, level);
        Ok(())
    }

    /// Returns pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.as_raw().to_vec()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsImage {
    /// Wrap a core image.
    pub(crate) fn from_image(inner: Image) -> Self {
        Self { inner }
    }

    pub(crate) fn inner(&self) -> &Image {
        &self.inner
    }

    pub(crate) fn inner_mut(&mut self) -> &mut Image {
        &mut self.inner
    }

    fn check_pos(&self, x: u32, y: u32) -> Result<(), JsValue> {
        if self.valid_pos(x, y) {
            Ok(())
        } else {
            Err(JsValue::from_str(&format!(
                "pixel ({x}, {y}) outside {}x{} image",
                self.width(),
                self.height()
            )))
        }
    }
}
