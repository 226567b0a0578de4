//! Raw PGM (P5) codec WASM bindings.
//!
//! Browsers have no file system, so these work on byte arrays. Decode
//! errors are reported as JavaScript errors carrying the failure cause.

use crate::instrument::JsAccessCounter;
use crate::types::{js_error, JsImage};
use gray8_core::pgm;
use wasm_bindgen::prelude::*;

/// Decode a binary PGM file.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// try {
///   const image = decode_pgm(bytes);
/// } catch (e) {
///   console.error(`Not a usable PGM: ${e}`);
/// }
/// ```
#[wasm_bindgen]
pub fn decode_pgm(bytes: &[u8]) -> Result<JsImage, JsValue> {
    pgm::decode(bytes).map(JsImage::from_image).map_err(js_error)
}

/// Decode a binary PGM file, counting the pixel copy on `counter`.
///
/// The counter stays attached to the returned image.
#[wasm_bindgen]
pub fn decode_pgm_observed(bytes: &[u8], counter: &JsAccessCounter) -> Result<JsImage, JsValue> {
    pgm::decode_observed(bytes, counter.inner().clone())
        .map(JsImage::from_image)
        .map_err(js_error)
}

/// Encode an image as a binary PGM file.
#[wasm_bindgen]
pub fn encode_pgm(image: &JsImage) -> Vec<u8> {
    pgm::encode(image.inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gray8_core::Image;

    #[test]
    fn test_encode_header() {
        let mut img = Image::new(2, 1, 100).unwrap();
        img.copy_from_slice(&[1, 99]);
        let bytes = encode_pgm(&JsImage::from_image(img));
        assert_eq!(&bytes[..], b"P5\n2 1\n100\n\x01\x63");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_roundtrip() {
        let img = JsImage::from_pixels(2, 2, 200, &[0, 50, 150, 200]).unwrap();
        let decoded = decode_pgm(&encode_pgm(&img)).unwrap();
        assert_eq!(decoded.maxval(), 200);
        assert_eq!(decoded.pixels(), vec![0, 50, 150, 200]);
    }

    #[wasm_bindgen_test]
    fn test_decode_observed_counts() {
        let img = JsImage::from_pixels(4, 4, 255, &[3; 16]).unwrap();
        let counter = JsAccessCounter::new("pixmem");
        decode_pgm_observed(&encode_pgm(&img), &counter).unwrap();
        assert_eq!(counter.count(), 16);
    }

    #[wasm_bindgen_test]
    fn test_decode_huge_header_rejected() {
        assert!(decode_pgm(b"P5 30000 30000 255\n").is_err());
    }

    #[wasm_bindgen_test]
    fn test_decode_invalid() {
        assert!(decode_pgm(b"P2 1 1 255\n0").is_err());
        assert!(decode_pgm(&[]).is_err());
    }
}
