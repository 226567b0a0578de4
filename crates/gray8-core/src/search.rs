//! Exact sub-image matching and search.
//!
//! [`locate_sub_image`] scans candidate top-left positions in row-major
//! order (`y` ascending, then `x` ascending) and returns the first
//! position where [`match_sub_image`] succeeds. The scan order is the
//! tie-break: of several matches, the one with the lowest `y`, then the
//! lowest `x`, wins.
//!
//! # Performance
//!
//! Worst case is `O((W1 - W2 + 1) * (H1 - H2 + 1) * W2 * H2)`. Each
//! candidate stops comparing at its first mismatching pixel.

use log::debug;

use crate::buffer::Image;

/// Check whether `sub` matches `image` with its top-left corner at `(x, y)`.
///
/// Returns `false` if `sub` would extend past the edges of `image` from
/// that position.
///
/// # Panics
///
/// Panics if `(x, y)` is not a valid position in `image`.
pub fn match_sub_image(image: &Image, x: usize, y: usize, sub: &Image) -> bool {
    assert!(
        image.valid_pos(x, y),
        "position ({x}, {y}) outside {}x{} image",
        image.width(),
        image.height()
    );

    let sw = sub.width();
    if !image.valid_rect(x, y, sw, sub.height()) {
        return false;
    }
    if sw == 0 {
        return true;
    }

    let haystack = image.as_raw();
    let mut compared = 0u64;
    let mut matched = true;
    for (j, needle_row) in sub.as_raw().chunks_exact(sw).enumerate() {
        let start = image.index(x, y + j);
        let row = &haystack[start..start + sw];
        match row.iter().zip(needle_row).position(|(a, b)| a != b) {
            Some(i) => {
                compared += i as u64 + 1;
                matched = false;
                break;
            }
            None => compared += sw as u64,
        }
    }

    image.record(compared);
    sub.record(compared);
    matched
}

/// Search for `sub` inside `image`.
///
/// # Returns
///
/// `Some((x, y))` for the first match in row-major scan order, or `None`
/// if `sub` appears nowhere (including when it is larger than `image`).
/// An empty `sub` matches at `(0, 0)` of any non-empty image.
pub fn locate_sub_image(image: &Image, sub: &Image) -> Option<(usize, usize)> {
    if sub.width() > image.width() || sub.height() > image.height() {
        debug!(
            "sub-image {}x{} larger than {}x{} image",
            sub.width(),
            sub.height(),
            image.width(),
            image.height()
        );
        return None;
    }

    let max_x = image.width() - sub.width();
    let max_y = image.height() - sub.height();
    for y in 0..=max_y {
        for x in 0..=max_x {
            if image.valid_pos(x, y) && match_sub_image(image, x, y, sub) {
                debug!("sub-image found at ({x}, {y})");
                return Some((x, y));
            }
        }
    }

    debug!("sub-image not found");
    None
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::transform::crop;
    use proptest::prelude::*;

    proptest! {
        /// Property: a cropped piece is always found, at or before its origin.
        #[test]
        fn prop_cropped_piece_is_found(
            (w, h) in (1usize..=12, 1usize..=12),
            seed in prop::collection::vec(0u8..4, 144),
            fx in 0.0f64..1.0,
            fy in 0.0f64..1.0,
        ) {
            let mut img = Image::new(w, h, 255).unwrap();
            img.copy_from_slice(&seed[..w * h]);

            let x = (w as f64 * fx) as usize;
            let y = (h as f64 * fy) as usize;
            let piece = crop(&img, x, y, (w - x).min(3), (h - y).min(3)).unwrap();

            let (found_x, found_y) = locate_sub_image(&img, &piece).unwrap();
            prop_assert!(found_y < y || (found_y == y && found_x <= x));
            prop_assert!(match_sub_image(&img, found_x, found_y, &piece));
        }
    }
}
