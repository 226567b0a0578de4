//! gray8 WASM - WebAssembly bindings for gray8
//!
//! This crate provides WASM bindings to expose the gray8-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - `JsImage`, the JavaScript-facing image handle
//! - `adjustments` - Negative, threshold and brighten
//! - `transform` - Rotate, mirror, crop, paste and blend
//! - `search` - Exact sub-image matching
//! - `blur` - Box blur
//! - `histogram` - Histogram and min/max statistics
//! - `pgm` - Raw PGM decoding and encoding
//! - `instrument` - Pixel-access counters
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_pgm, locate_sub_image } from '@gray8/wasm';
//!
//! await init();
//!
//! const screen = decode_pgm(new Uint8Array(await file.arrayBuffer()));
//! const pos = locate_sub_image(screen, icon);
//! ```

use wasm_bindgen::prelude::*;

mod adjustments;
mod blur;
mod histogram;
mod instrument;
mod logging;
mod pgm;
mod search;
mod transform;
mod types;

// Re-export public types
pub use adjustments::{brighten, negative, threshold};
pub use blur::blur;
pub use histogram::{compute_histogram, image_stats, JsHistogram};
pub use instrument::{detach_counter, JsAccessCounter};
pub use pgm::{decode_pgm, decode_pgm_observed, encode_pgm};
pub use search::{locate_sub_image, match_sub_image};
pub use transform::{blend, crop, mirror, paste, rotate};
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logging::init(log::LevelFilter::Info);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
