//! Box blur (mean filter).
//!
//! Each pixel `(x, y)` is replaced by the rounded mean of the pixels in the
//! window `[x - dx, x + dx] x [y - dy, y + dy]`, clipped to the image.
//! Pixels near an edge average over the smaller clipped window; there is
//! no wraparound or zero padding.
//!
//! # Algorithm
//!
//! A summed-area table of the original pixels is built first, so every
//! output is computed from pre-blur values and each window sum costs four
//! lookups regardless of the window size:
//! ```text
//! sum(x0..=x1, y0..=y1) = S[y1+1][x1+1] - S[y0][x1+1] - S[y1+1][x0] + S[y0][x0]
//! ```
//! Total cost is `O(width * height)`.

use log::debug;

use crate::buffer::Image;

/// Inclusive prefix sums with a zero border row and column.
struct SummedArea {
    stride: usize,
    sums: Vec<u64>,
}

impl SummedArea {
    fn new(pixels: &[u8], width: usize, height: usize) -> Self {
        let stride = width + 1;
        let mut sums = vec![0u64; stride * (height + 1)];
        for y in 0..height {
            let mut row_sum = 0u64;
            for x in 0..width {
                row_sum += pixels[y * width + x] as u64;
                sums[(y + 1) * stride + x + 1] = sums[y * stride + x + 1] + row_sum;
            }
        }
        Self { stride, sums }
    }

    /// Sum of the inclusive rectangle `[x0, x1] x [y0, y1]`.
    #[inline]
    fn sum(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> u64 {
        let s = self.stride;
        self.sums[(y1 + 1) * s + x1 + 1] + self.sums[y0 * s + x0]
            - self.sums[y0 * s + x1 + 1]
            - self.sums[(y1 + 1) * s + x0]
    }
}

/// Blur an image in place with a `(2dx+1) x (2dy+1)` mean filter.
///
/// Means are rounded half up. `blur(image, 0, 0)` leaves the image
/// unchanged.
pub fn blur(image: &mut Image, dx: usize, dy: usize) {
    let (w, h) = (image.width(), image.height());
    if image.is_empty() {
        return;
    }
    debug!("box blur {w}x{h} image with window {dx}x{dy}");

    let table = SummedArea::new(image.as_raw(), w, h);
    let pixels = image.raw_mut();
    for y in 0..h {
        let y0 = y.saturating_sub(dy);
        let y1 = y.saturating_add(dy).min(h - 1);
        for x in 0..w {
            let x0 = x.saturating_sub(dx);
            let x1 = x.saturating_add(dx).min(w - 1);

            let count = ((x1 - x0 + 1) * (y1 - y0 + 1)) as u64;
            let sum = table.sum(x0, y0, x1, y1);
            // Integer round-half-up of sum / count
            pixels[y * w + x] = ((2 * sum + count) / (2 * count)) as u8;
        }
    }

    image.record(2 * (w * h) as u64);
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: output stays within the input's level range.
        #[test]
        fn prop_blur_bounded_by_input(
            (w, h) in (1usize..=16, 1usize..=16),
            seed in prop::collection::vec(any::<u8>(), 256),
            (dx, dy) in (0usize..5, 0usize..5),
        ) {
            let mut img = Image::new(w, h, 255).unwrap();
            img.copy_from_slice(&seed[..w * h]);
            let lo = *img.as_raw().iter().min().unwrap();
            let hi = *img.as_raw().iter().max().unwrap();

            blur(&mut img, dx, dy);
            prop_assert!(img.as_raw().iter().all(|&p| lo <= p && p <= hi));
        }

        /// Property: a zero window never changes anything.
        #[test]
        fn prop_zero_window_identity(
            (w, h) in (1usize..=16, 1usize..=16),
            seed in prop::collection::vec(any::<u8>(), 256),
        ) {
            let mut img = Image::new(w, h, 255).unwrap();
            img.copy_from_slice(&seed[..w * h]);
            let original = img.clone();
            blur(&mut img, 0, 0);
            prop_assert_eq!(img, original);
        }
    }
}
