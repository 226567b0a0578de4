//! Pixel-access counter WASM bindings.

use crate::types::{js_error, JsImage};
use gray8_core::AccessCounter;
use wasm_bindgen::prelude::*;

/// A named pixel-access counter that can be attached to images.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const counter = new JsAccessCounter("pixmem");
/// counter.attach(image);
/// blur(image, 2, 2);
/// console.log(counter.count);
/// ```
#[wasm_bindgen]
pub struct JsAccessCounter {
    inner: AccessCounter,
}

#[wasm_bindgen]
impl JsAccessCounter {
    /// Create a counter starting at zero.
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str) -> Self {
        Self {
            inner: AccessCounter::new(name),
        }
    }

    /// Counter name
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    /// Accesses recorded since the last reset
    #[wasm_bindgen(getter)]
    pub fn count(&self) -> u64 {
        self.inner.count()
    }

    /// Set the count back to zero.
    pub fn reset(&self) {
        self.inner.reset();
    }

    /// Start counting accesses made to `image`.
    ///
    /// Images derived from `image` by transforms report to the same counter.
    pub fn attach(&self, image: &mut JsImage) {
        image.inner_mut().attach_observer(self.inner.clone());
    }

    /// Get a `{ name, count }` snapshot.
    pub fn report(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.report()).map_err(js_error)
    }
}

impl JsAccessCounter {
    pub(crate) fn inner(&self) -> &AccessCounter {
        &self.inner
    }
}

/// Stop reporting accesses made to `image`.
#[wasm_bindgen]
pub fn detach_counter(image: &mut JsImage) {
    image.inner_mut().detach_observer();
}

#[cfg(test)]
mod tests {
    use super::*;
    use gray8_core::Image;

    #[test]
    fn test_counter_tracks_attached_image() {
        let counter = JsAccessCounter::new("pixmem");
        let mut img = JsImage::from_image(Image::new(2, 2, 255).unwrap());
        counter.attach(&mut img);

        crate::adjustments::negative(&mut img);
        assert_eq!(counter.count(), 8);
        assert_eq!(counter.name(), "pixmem");

        counter.reset();
        detach_counter(&mut img);
        crate::adjustments::negative(&mut img);
        assert_eq!(counter.count(), 0);
    }
}
