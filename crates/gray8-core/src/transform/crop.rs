//! Rectangular cropping.
//!
//! The crop region is given in pixels as a top-left corner `(x, y)` and a
//! size `(w, h)`. It must lie entirely inside the source image.

use crate::buffer::{Image, ImageError};

/// Crop a rectangular sub-image.
///
/// # Arguments
///
/// * `image` - Source image to crop
/// * `x`, `y` - Top-left corner of the crop region
/// * `w`, `h` - Size of the crop region
///
/// # Returns
///
/// A new `w x h` image where `dst(i, j) = src(x + i, y + j)`. The input is
/// not modified.
///
/// # Errors
///
/// Returns [`ImageError::Allocation`] if the output cannot be allocated.
///
/// # Panics
///
/// Panics if the region is not inside the image (see [`Image::valid_rect`]).
pub fn crop(image: &Image, x: usize, y: usize, w: usize, h: usize) -> Result<Image, ImageError> {
    assert!(
        image.valid_rect(x, y, w, h),
        "crop region ({x}, {y}, {w}, {h}) outside {}x{} image",
        image.width(),
        image.height()
    );

    let mut output = image.blank_like(w, h)?;
    if w == 0 {
        return Ok(output);
    }

    // Copy pixel data row by row
    let src = image.as_raw();
    for (j, dst_row) in output.raw_mut().chunks_exact_mut(w).enumerate() {
        let start = image.index(x, y + j);
        dst_row.copy_from_slice(&src[start..start + w]);
    }

    output.record(2 * (w * h) as u64);
    Ok(output)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
