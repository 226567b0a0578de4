//! Box blur WASM binding.

use crate::types::JsImage;
use wasm_bindgen::prelude::*;

/// Blur in place with a `(2*dx+1) x (2*dy+1)` mean filter clipped to the image.
#[wasm_bindgen]
pub fn blur(image: &mut JsImage, dx: u32, dy: u32) {
    gray8_core::blur(image.inner_mut(), dx as usize, dy as usize);
}
