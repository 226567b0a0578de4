//! Coordinate to offset mapping for row-major pixel arrays.

/// Map pixel `(x, y)` to its linear offset in a row-major buffer.
///
/// Pixel `(x, y)` of a `width x height` image lives at `y * width + x`.
/// The coordinates must lie inside the image; this is checked in debug
/// builds only.
#[inline]
pub fn pixel_index(width: usize, height: usize, x: usize, y: usize) -> usize {
    debug_assert!(
        x < width && y < height,
        "pixel ({x}, {y}) outside {width}x{height} image"
    );
    y * width + x
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every valid coordinate maps to a distinct in-bounds offset.
        #[test]
        fn prop_index_is_bijective(width in 1usize..=64, height in 1usize..=64) {
            let mut seen = vec![false; width * height];
            for y in 0..height {
                for x in 0..width {
                    let i = pixel_index(width, height, x, y);
                    prop_assert!(i < width * height);
                    prop_assert!(!seen[i], "offset {} produced twice", i);
                    seen[i] = true;
                }
            }
        }

        /// Property: stepping one column moves one byte, one row moves `width` bytes.
        #[test]
        fn prop_index_strides(
            (width, height) in (2usize..=64, 2usize..=64),
            fx in 0.0f64..1.0,
            fy in 0.0f64..1.0,
        ) {
            let x = ((width - 1) as f64 * fx) as usize;
            let y = ((height - 1) as f64 * fy) as usize;
            let base = pixel_index(width, height, x, y);
            prop_assert_eq!(pixel_index(width, height, x + 1, y), base + 1);
            prop_assert_eq!(pixel_index(width, height, x, y + 1), base + width);
        }
    }
}
