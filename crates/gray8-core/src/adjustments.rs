//! Pointwise gray-level adjustments.
//!
//! Each adjustment rewrites every pixel in place from its own value only.
//! No allocation is involved and none of them can fail.

use crate::buffer::Image;

/// Round half up and saturate a computed level into `[0, maxval]`.
///
/// Rounding happens before clamping. NaN saturates to 0.
#[inline]
pub(crate) fn saturate(value: f64, maxval: u8) -> u8 {
    let rounded = (value + 0.5).floor();
    if rounded.is_nan() {
        return 0;
    }
    rounded.clamp(0.0, maxval as f64) as u8
}

/// Turn the image into its photographic negative.
///
/// Formula: `output = maxval - input`
///
/// Levels above `maxval` are treated as `maxval`.
pub fn negative(image: &mut Image) {
    let maxval = image.maxval();
    image.map_in_place(|p| maxval.saturating_sub(p));
}

/// Apply a threshold.
///
/// Pixels with `level < thr` become black (0), all others become white
/// (`maxval`).
pub fn threshold(image: &mut Image, thr: u8) {
    let maxval = image.maxval();
    image.map_in_place(|p| if p < thr { 0 } else { maxval });
}

/// Brighten (or darken) the image by a factor.
///
/// Formula: `output = round(input * factor)`, saturated to `[0, maxval]`.
///
/// Factors above 1.0 brighten, factors below 1.0 darken. Negative factors
/// are allowed and saturate to black.
pub fn brighten(image: &mut Image, factor: f64) {
    let maxval = image.maxval();
    image.map_in_place(|p| saturate(p as f64 * factor, maxval));
}
