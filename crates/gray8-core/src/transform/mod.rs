//! Geometric transformations and composition.
//!
//! Two families of operations live here:
//!
//! - **Allocating** (`rotate`, `mirror`, `crop`): build and return a new
//!   [`Image`](crate::Image) with the same maxval. The input is never
//!   modified. They fail only if the new image cannot be allocated.
//! - **In place** (`paste`, `blend`): write a source image into a region
//!   of a destination image. No allocation is involved.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, `x` is the column, `y` is the row
//! - Rotation is 90 degrees clockwise
//! - Rectangles are `(x, y, width, height)` in pixels

mod compose;
mod crop;
mod rotation;

pub use compose::{blend, paste};
pub use crop::crop;
pub use rotation::{mirror, rotate};
