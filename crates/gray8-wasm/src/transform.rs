//! WASM bindings for geometric transforms and composition.
//!
//! Core transforms panic on out-of-range regions. These bindings check
//! the region first and report a JavaScript error instead.

use crate::types::{js_error, JsImage};
use gray8_core::transform;
use wasm_bindgen::prelude::*;

/// Rotate an image 90 degrees clockwise.
///
/// # Returns
///
/// A new `JsImage` with width and height swapped. The source is unchanged.
#[wasm_bindgen]
pub fn rotate(image: &JsImage) -> Result<JsImage, JsValue> {
    transform::rotate(image.inner())
        .map(JsImage::from_image)
        .map_err(js_error)
}

/// Flip an image horizontally into a new `JsImage`.
#[wasm_bindgen]
pub fn mirror(image: &JsImage) -> Result<JsImage, JsValue> {
    transform::mirror(image.inner())
        .map(JsImage::from_image)
        .map_err(js_error)
}

/// Copy the `w x h` region at `(x, y)` into a new `JsImage`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const corner = crop(image, 0, 0, 16, 16);
/// ```
#[wasm_bindgen]
pub fn crop(image: &JsImage, x: u32, y: u32, w: u32, h: u32) -> Result<JsImage, JsValue> {
    if !image.valid_rect(x, y, w, h) {
        return Err(JsValue::from_str(&format!(
            "crop region {w}x{h} at ({x}, {y}) outside {}x{} image",
            image.width(),
            image.height()
        )));
    }
    transform::crop(image.inner(), x as usize, y as usize, w as usize, h as usize)
        .map(JsImage::from_image)
        .map_err(js_error)
}

/// Overwrite `dst` with `src` placed at `(x, y)`.
#[wasm_bindgen]
pub fn paste(dst: &mut JsImage, x: u32, y: u32, src: &JsImage) -> Result<(), JsValue> {
    check_fits(dst, x, y, src)?;
    transform::paste(dst.inner_mut(), x as usize, y as usize, src.inner());
    Ok(())
}

/// Mix `src` into `dst` at `(x, y)`: `alpha * src + (1 - alpha) * dst`.
#[wasm_bindgen]
pub fn blend(dst: &mut JsImage, x: u32, y: u32, src: &JsImage, alpha: f64) -> Result<(), JsValue> {
    check_fits(dst, x, y, src)?;
    transform::blend(dst.inner_mut(), x as usize, y as usize, src.inner(), alpha);
    Ok(())
}

fn check_fits(dst: &JsImage, x: u32, y: u32, src: &JsImage) -> Result<(), JsValue> {
    if dst.valid_rect(x, y, src.width(), src.height()) {
        Ok(())
    } else {
        Err(JsValue::from_str(&format!(
            "{}x{} image at ({x}, {y}) does not fit in {}x{} image",
            src.width(),
            src.height(),
            dst.width(),
            dst.height()
        )))
    }
}
