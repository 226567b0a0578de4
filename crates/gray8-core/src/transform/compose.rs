//! Pasting and alpha-blending one image into another.
//!
//! Both operations write `src` into `dst` with its top-left corner at
//! `(x, y)`. The whole of `src` must fit inside `dst` at that position.
//!
//! Blending computes, for every covered pixel:
//! ```text
//! dst = round(alpha * src + (1 - alpha) * dst), saturated to [0, dst.maxval]
//! ```
//! `alpha` outside `[0, 1]` extrapolates and still saturates.

use crate::adjustments::saturate;
use crate::buffer::Image;

/// Panic unless `src` fits inside `dst` at `(x, y)`.
fn assert_fits(dst: &Image, x: usize, y: usize, src: &Image) {
    assert!(
        dst.valid_rect(x, y, src.width(), src.height()),
        "{}x{} image does not fit in {}x{} image at ({x}, {y})",
        src.width(),
        src.height(),
        dst.width(),
        dst.height()
    );
}

/// Paste `src` into `dst` at position `(x, y)`, overwriting.
///
/// # Panics
///
/// Panics if `src` does not fit inside `dst` at `(x, y)`.
pub fn paste(dst: &mut Image, x: usize, y: usize, src: &Image) {
    assert_fits(dst, x, y, src);
    let w = src.width();
    if w == 0 {
        return;
    }

    for (j, src_row) in src.as_raw().chunks_exact(w).enumerate() {
        let start = dst.index(x, y + j);
        dst.raw_mut()[start..start + w].copy_from_slice(src_row);
    }

    let n = src.pixel_count() as u64;
    src.record(n);
    dst.record(n);
}

/// Blend `src` into `dst` at position `(x, y)` with weight `alpha`.
///
/// `alpha = 1.0` behaves like [`paste`]; `alpha = 0.0` leaves `dst`
/// unchanged. Results are rounded half up and saturated to `dst`'s maxval.
///
/// # Panics
///
/// Panics if `src` does not fit inside `dst` at `(x, y)`.
pub fn blend(dst: &mut Image, x: usize, y: usize, src: &Image, alpha: f64) {
    assert_fits(dst, x, y, src);
    let w = src.width();
    if w == 0 {
        return;
    }

    let maxval = dst.maxval();
    for (j, src_row) in src.as_raw().chunks_exact(w).enumerate() {
        let start = dst.index(x, y + j);
        let dst_row = &mut dst.raw_mut()[start..start + w];
        for (d, &s) in dst_row.iter_mut().zip(src_row) {
            *d = saturate(alpha * s as f64 + (1.0 - alpha) * *d as f64, maxval);
        }
    }

    let n = src.pixel_count() as u64;
    src.record(n);
    dst.record(2 * n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::AccessCounter;

    fn filled(width: usize, height: usize, maxval: u8, level: u8) -> Image {
        let mut img = Image::new(width, height, maxval).unwrap();
        img.copy_from_slice(&vec![level; width * height]);
        img
    }

    fn gradient(width: usize, height: usize) -> Image {
        let mut img = Image::new(width, height, 255).unwrap();
        let pixels: Vec<u8> = (0..width * height).map(|i| (i * 7 % 256) as u8).collect();
        img.copy_from_slice(&pixels);
        img
    }

    #[test]
    fn test_paste_region() {
        let mut dst = filled(4, 3, 255, 0);
        let src = filled(2, 2, 255, 9);
        paste(&mut dst, 1, 1, &src);

        assert_eq!(dst.as_raw(), &[0, 0, 0, 0, 0, 9, 9, 0, 0, 9, 9, 0]);
    }

    #[test]
    fn test_paste_whole_image() {
        let mut dst = filled(3, 3, 255, 1);
        let src = gradient(3, 3);
        paste(&mut dst, 0, 0, &src);
        assert_eq!(dst.as_raw(), src.as_raw());
    }

    #[test]
    fn test_paste_at_corner() {
        let mut dst = filled(4, 4, 255, 0);
        let src = filled(1, 1, 255, 5);
        paste(&mut dst, 3, 3, &src);
        assert_eq!(dst.get_pixel(3, 3), 5);
    }

    #[test]
    fn test_paste_empty_source() {
        let mut dst = gradient(3, 3);
        let before = dst.clone();
        let src = Image::new(0, 0, 255).unwrap();
        paste(&mut dst, 3, 3, &src);
        assert_eq!(dst, before);
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_paste_out_of_bounds_panics() {
        let mut dst = filled(4, 4, 255, 0);
        let src = filled(2, 2, 255, 1);
        paste(&mut dst, 3, 0, &src);
    }

    #[test]
    fn test_blend_half() {
        let mut dst = filled(2, 1, 255, 100);
        let src = filled(2, 1, 255, 201);
        blend(&mut dst, 0, 0, &src, 0.5);
        // 0.5 * 201 + 0.5 * 100 = 150.5 -> 151
        assert_eq!(dst.as_raw(), &[151, 151]);
    }

    #[test]
    fn test_blend_alpha_one_is_paste() {
        let base = gradient(5, 4);
        let src = filled(2, 3, 255, 42);

        let mut pasted = base.clone();
        paste(&mut pasted, 2, 1, &src);
        let mut blended = base;
        blend(&mut blended, 2, 1, &src, 1.0);

        assert_eq!(blended, pasted);
    }

    #[test]
    fn test_blend_alpha_zero_is_noop() {
        let base = gradient(5, 4);
        let mut blended = base.clone();
        blend(&mut blended, 1, 1, &filled(3, 2, 255, 200), 0.0);
        assert_eq!(blended, base);
    }

    #[test]
    fn test_blend_overshoot_saturates() {
        let mut dst = filled(1, 1, 255, 100);
        let src = filled(1, 1, 255, 200);
        blend(&mut dst, 0, 0, &src, 2.0);
        // 2 * 200 - 100 = 300
        assert_eq!(dst.as_raw(), &[255]);
    }

    #[test]
    fn test_blend_undershoot_saturates() {
        let mut dst = filled(1, 1, 255, 100);
        let src = filled(1, 1, 255, 200);
        blend(&mut dst, 0, 0, &src, -1.0);
        // -200 + 200 = 0 exactly; push further
        assert_eq!(dst.as_raw(), &[0]);

        let mut dst = filled(1, 1, 255, 10);
        blend(&mut dst, 0, 0, &src, -1.0);
        assert_eq!(dst.as_raw(), &[0]);
    }

    #[test]
    fn test_blend_saturates_to_dst_maxval() {
        let mut dst = filled(1, 1, 100, 100);
        let src = filled(1, 1, 255, 250);
        blend(&mut dst, 0, 0, &src, 0.5);
        assert_eq!(dst.as_raw(), &[100]);
    }

    #[test]
    fn test_compose_counts_src_and_dst() {
        let src_counter = AccessCounter::new("src");
        let dst_counter = AccessCounter::new("dst");
        let mut dst = filled(4, 4, 255, 0);
        let mut src = filled(2, 2, 255, 1);
        dst.attach_observer(dst_counter.clone());
        src.attach_observer(src_counter.clone());

        paste(&mut dst, 0, 0, &src);
        assert_eq!(src_counter.count(), 4);
        assert_eq!(dst_counter.count(), 4);

        blend(&mut dst, 0, 0, &src, 0.5);
        assert_eq!(src_counter.count(), 8);
        assert_eq!(dst_counter.count(), 12);
    }
}
