//! Lossless 90-degree rotation and horizontal mirroring.
//!
//! Both transforms are pure permutations of pixels, so no interpolation
//! is involved.
//!
//! For a clockwise rotation of a `W x H` image the output is `H x W` and:
//! ```text
//! dst(H - 1 - y, x) = src(x, y)
//! ```

use crate::buffer::{pixel_index, Image, ImageError};

/// Rotate an image 90 degrees clockwise.
///
/// # Returns
///
/// A new image with width and height swapped. The input is not modified.
///
/// # Errors
///
/// Returns [`ImageError::Allocation`] if the output cannot be allocated.
pub fn rotate(image: &Image) -> Result<Image, ImageError> {
    let (w, h) = (image.width(), image.height());
    let mut output = image.blank_like(h, w)?;

    let src = image.as_raw();
    let dst = output.raw_mut();
    for y in 0..h {
        for x in 0..w {
            dst[pixel_index(h, w, h - 1 - y, x)] = src[pixel_index(w, h, x, y)];
        }
    }

    output.record(2 * src.len() as u64);
    Ok(output)
}

/// Mirror an image left to right.
///
/// # Returns
///
/// A new image of the same size where `dst(W - 1 - x, y) = src(x, y)`.
/// The input is not modified.
///
/// # Errors
///
/// Returns [`ImageError::Allocation`] if the output cannot be allocated.
pub fn mirror(image: &Image) -> Result<Image, ImageError> {
    let w = image.width();
    let mut output = image.blank_like(w, image.height())?;

    if w > 0 {
        let rows = image.as_raw().chunks_exact(w);
        for (src_row, dst_row) in rows.zip(output.raw_mut().chunks_exact_mut(w)) {
            for (d, s) in dst_row.iter_mut().zip(src_row.iter().rev()) {
                *d = *s;
            }
        }
    }

    output.record(2 * image.pixel_count() as u64);
    Ok(output)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
