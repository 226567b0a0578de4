//! Pointwise adjustment WASM bindings.
//!
//! All three adjustments modify the image in place and cannot fail.

use crate::types::JsImage;
use gray8_core::adjustments;
use wasm_bindgen::prelude::*;

/// Turn an image into its photographic negative (`maxval - level`).
#[wasm_bindgen]
pub fn negative(image: &mut JsImage) {
    adjustments::negative(image.inner_mut());
}

/// Set pixels below `thr` to black and all others to white (`maxval`).
#[wasm_bindgen]
pub fn threshold(image: &mut JsImage, thr: u8) {
    adjustments::threshold(image.inner_mut(), thr);
}

/// Multiply every level by `factor`, rounding and saturating to `[0, maxval]`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// brighten(image, 1.5); // 50% brighter
/// brighten(image, 0.5); // half as bright
/// ```
#[wasm_bindgen]
pub fn brighten(image: &mut JsImage, factor: f64) {
    adjustments::brighten(image.inner_mut(), factor);
}
