//! Histogram and statistics WASM bindings.

use crate::types::{js_error, JsImage};
use gray8_core::histogram;
use wasm_bindgen::prelude::*;

/// Histogram result accessible from JavaScript.
///
/// Contains the 256-bin gray-level histogram plus helpers for clipping
/// detection and normalization.
#[wasm_bindgen]
pub struct JsHistogram {
    bins: Vec<u32>,
    max_value: u32,
    has_highlight_clipping: bool,
    has_shadow_clipping: bool,
}

#[wasm_bindgen]
impl JsHistogram {
    /// Get the gray-level histogram (256 bins).
    pub fn bins(&self) -> Vec<u32> {
        self.bins.clone()
    }

    /// Get the largest bin count.
    ///
    /// Useful for normalizing histogram display.
    #[wasm_bindgen(getter)]
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Check if any pixel sits at the image's `maxval`.
    #[wasm_bindgen(getter)]
    pub fn has_highlight_clipping(&self) -> bool {
        self.has_highlight_clipping
    }

    /// Check if any pixel is black.
    #[wasm_bindgen(getter)]
    pub fn has_shadow_clipping(&self) -> bool {
        self.has_shadow_clipping
    }
}

/// Compute the gray-level histogram of an image.
///
/// # Example (TypeScript)
/// ```typescript
/// const hist = compute_histogram(image);
/// const bins = hist.bins();
/// const peak = hist.max_value;
/// ```
#[wasm_bindgen]
pub fn compute_histogram(image: &JsImage) -> JsHistogram {
    let hist = histogram::compute_histogram(image.inner());
    JsHistogram {
        bins: hist.bins.to_vec(),
        max_value: hist.max_value(),
        has_highlight_clipping: hist.has_highlight_clipping(image.maxval()),
        has_shadow_clipping: hist.has_shadow_clipping(),
    }
}

/// Get the darkest and brightest levels as a `{ min, max }` object.
#[wasm_bindgen]
pub fn image_stats(image: &JsImage) -> Result<JsValue, JsValue> {
    let stats = histogram::image_stats(image.inner());
    serde_wasm_bindgen::to_value(&stats).map_err(js_error)
}
