//! Raw PGM (P5) reading and writing.
//!
//! This module provides functionality for:
//! - Decoding a binary graymap from bytes or a file
//! - Encoding an image to a binary graymap in memory or on disk
//!
//! # Format
//!
//! ```text
//! P5 <width> <height> <maxval><one whitespace byte><width*height raw bytes>
//! ```
//!
//! Header tokens are separated by whitespace, and `#` comments running to
//! the end of the line may appear before each numeric token. Only
//! single-byte samples (`maxval <= 255`) are supported. Pixels are stored
//! row-major, one byte each, with no padding.
//!
//! See <http://netpbm.sourceforge.net/doc/pgm.html>.

mod decode;
mod encode;
mod types;

pub use decode::{decode, decode_observed, load, load_observed};
pub use encode::{encode, save};
pub use types::PgmError;
