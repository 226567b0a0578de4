//! Gray-level histogram and min/max statistics.

use crate::buffer::Image;
use crate::{Histogram, ImageStats};

/// Compute the 256-bin gray-level histogram of an image.
///
/// Bins saturate at `u32::MAX`.
///
/// # Performance
/// Single pass, O(n) in the number of pixels, constant memory.
pub fn compute_histogram(image: &Image) -> Histogram {
    let mut hist = Histogram::new();
    for &p in image.as_raw() {
        increment(&mut hist.bins[p as usize]);
    }
    image.record(image.pixel_count() as u64);
    hist
}

#[inline]
fn increment(bin: &mut u32) {
    *bin = bin.saturating_add(1);
}

/// Find the minimum and maximum gray levels in an image.
///
/// An empty image reports `min = max = 0`.
pub fn image_stats(image: &Image) -> ImageStats {
    let pixels = image.as_raw();
    image.record(pixels.len() as u64);

    let (min, max) = pixels
        .iter()
        .fold((u8::MAX, u8::MIN), |(lo, hi), &p| (lo.min(p), hi.max(p)));
    if pixels.is_empty() {
        ImageStats::default()
    } else {
        ImageStats { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_from(width: usize, height: usize, maxval: u8, pixels: &[u8]) -> Image {
        let mut img = Image::new(width, height, maxval).unwrap();
        img.copy_from_slice(pixels);
        img
    }

    #[test]
    fn test_empty_histogram() {
        let img = Image::new(0, 0, 255).unwrap();
        let hist = compute_histogram(&img);
        assert_eq!(hist.max_value(), 0);
        assert_eq!(hist.total(), 0);
    }

    #[test]
    fn test_histogram_counts() {
        let img = image_from(4, 1, 255, &[100, 100, 100, 200]);
        let hist = compute_histogram(&img);
        assert_eq!(hist.bins[100], 3);
        assert_eq!(hist.bins[200], 1);
        assert_eq!(hist.max_value(), 3);
        assert_eq!(hist.total(), 4);
    }

    #[test]
    fn test_histogram_clipping() {
        let img = image_from(3, 1, 200, &[0, 50, 200]);
        let hist = compute_histogram(&img);
        assert!(hist.has_shadow_clipping());
        assert!(hist.has_highlight_clipping(200));
        assert!(!hist.has_highlight_clipping(255));
    }

    #[test]
    fn test_no_clipping_midtone_image() {
        let img = image_from(4, 1, 255, &[50, 60, 70, 220]);
        let hist = compute_histogram(&img);
        assert!(!hist.has_highlight_clipping(255));
        assert!(!hist.has_shadow_clipping());
    }

    #[test]
    fn test_gradient_histogram() {
        let pixels: Vec<u8> = (0..=255).collect();
        let img = image_from(256, 1, 255, &pixels);
        let hist = compute_histogram(&img);
        assert!(hist.bins.iter().all(|&b| b == 1));
        assert_eq!(hist.max_value(), 1);
    }

    #[test]
    fn test_full_bin_saturates() {
        let mut bin = u32::MAX - 1;
        increment(&mut bin);
        assert_eq!(bin, u32::MAX);
        increment(&mut bin);
        assert_eq!(bin, u32::MAX);
    }

    #[test]
    fn test_stats() {
        let img = image_from(3, 2, 255, &[40, 7, 90, 12, 250, 33]);
        assert_eq!(image_stats(&img), ImageStats { min: 7, max: 250 });
    }

    #[test]
    fn test_stats_uniform() {
        let img = image_from(2, 2, 255, &[5, 5, 5, 5]);
        assert_eq!(image_stats(&img), ImageStats { min: 5, max: 5 });
    }

    #[test]
    fn test_stats_black_image() {
        let img = Image::new(3, 3, 255).unwrap();
        assert_eq!(image_stats(&img), ImageStats { min: 0, max: 0 });
    }

    #[test]
    fn test_stats_empty() {
        let img = Image::new(0, 4, 255).unwrap();
        assert_eq!(image_stats(&img), ImageStats::default());
    }
}
