//! Sub-image search WASM bindings.

use crate::types::JsImage;
use gray8_core::search;
use wasm_bindgen::prelude::*;

/// Check whether `sub` appears in `image` with its top-left corner at `(x, y)`.
///
/// Returns `false` for a position outside `image`.
#[wasm_bindgen]
pub fn match_sub_image(image: &JsImage, x: u32, y: u32, sub: &JsImage) -> bool {
    image.valid_pos(x, y) && search::match_sub_image(image.inner(), x as usize, y as usize, sub.inner())
}

/// Find the first occurrence of `sub` in `image`, scanning row by row.
///
/// # Returns
///
/// `[x, y]` of the match, or `undefined` if `sub` does not occur.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const pos = locate_sub_image(screen, icon);
/// if (pos) console.log(`found at ${pos[0]}, ${pos[1]}`);
/// ```
#[wasm_bindgen]
pub fn locate_sub_image(image: &JsImage, sub: &JsImage) -> Option<Vec<u32>> {
    search::locate_sub_image(image.inner(), sub.inner()).map(|(x, y)| vec![x as u32, y as u32])
}
