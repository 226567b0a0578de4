//! PGM (P5) decoding.

use std::fs;
use std::path::Path;

use log::debug;

use super::PgmError;
use crate::buffer::{Image, ImageError, PIX_MAX};
use crate::instrument::PixelObserver;

/// Whitespace as understood by the PGM header grammar (C `isspace`).
#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Cursor over the ASCII header.
struct HeaderReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> HeaderReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn next_byte(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Skip any run of whitespace and `#` comments (to end of line).
    fn skip_separators(&mut self) {
        while let Some(b) = self.peek() {
            if is_space(b) {
                self.pos += 1;
            } else if b == b'#' {
                while let Some(c) = self.next_byte() {
                    if c == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    /// Read an optionally signed decimal integer after any separators.
    ///
    /// Returns `None` if no digits follow or the value overflows.
    fn read_number(&mut self) -> Option<i64> {
        self.skip_separators();
        let negative = match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                true
            }
            Some(b'+') => {
                self.pos += 1;
                false
            }
            _ => false,
        };

        let start = self.pos;
        let mut value: i64 = 0;
        while let Some(d @ b'0'..=b'9') = self.peek() {
            value = value.checked_mul(10)?.checked_add((d - b'0') as i64)?;
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        Some(if negative { -value } else { value })
    }

    /// Read a non-negative dimension.
    fn read_dimension(&mut self) -> Option<usize> {
        self.read_number()
            .filter(|&v| v >= 0)
            .and_then(|v| usize::try_from(v).ok())
    }

    /// Bytes after the cursor.
    fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos.min(self.bytes.len())..]
    }
}

/// Decode a raw PGM image from bytes.
///
/// Exactly `width * height` pixel bytes are read after the header;
/// anything after them is ignored. Short input is rejected before any
/// pixel memory is allocated.
///
/// # Errors
///
/// Returns the first failing check, in file order: [`PgmError::InvalidFormat`],
/// [`PgmError::InvalidWidth`], [`PgmError::InvalidHeight`],
/// [`PgmError::InvalidMaxval`], [`PgmError::WhitespaceExpected`],
/// [`PgmError::TruncatedPixels`], [`PgmError::Image`] (allocation).
pub fn decode(bytes: &[u8]) -> Result<Image, PgmError> {
    decode_with(bytes, |_| {})
}

/// Decode a raw PGM image, reporting the pixel copy to `observer`.
///
/// The observer stays attached to the returned image.
pub fn decode_observed<O: PixelObserver + 'static>(
    bytes: &[u8],
    observer: O,
) -> Result<Image, PgmError> {
    decode_with(bytes, |image| image.attach_observer(observer))
}

fn decode_with(bytes: &[u8], attach: impl FnOnce(&mut Image)) -> Result<Image, PgmError> {
    let mut reader = HeaderReader::new(bytes);

    if reader.next_byte() != Some(b'P') || reader.next_byte() != Some(b'5') {
        return Err(PgmError::InvalidFormat);
    }
    let width = reader.read_dimension().ok_or(PgmError::InvalidWidth)?;
    let height = reader.read_dimension().ok_or(PgmError::InvalidHeight)?;
    let maxval = reader
        .read_number()
        .filter(|&v| 0 < v && v <= PIX_MAX as i64)
        .ok_or(PgmError::InvalidMaxval)? as u8;
    match reader.next_byte() {
        Some(b) if is_space(b) => {}
        _ => return Err(PgmError::WhitespaceExpected),
    }

    let expected = width
        .checked_mul(height)
        .ok_or(ImageError::Allocation { width, height })?;
    let data = reader.rest();
    if data.len() < expected {
        return Err(PgmError::TruncatedPixels {
            expected,
            actual: data.len(),
        });
    }

    let mut image = Image::new(width, height, maxval)?;
    attach(&mut image);
    image.copy_from_slice(&data[..expected]);

    Ok(image)
}

/// Load a raw PGM file.
///
/// # Errors
///
/// Returns [`PgmError::Open`] if the file cannot be read, otherwise any
/// error from [`decode`].
pub fn load(path: impl AsRef<Path>) -> Result<Image, PgmError> {
    load_with(path.as_ref(), decode)
}

/// Load a raw PGM file, reporting the pixel copy to `observer`.
pub fn load_observed<O: PixelObserver + 'static>(
    path: impl AsRef<Path>,
    observer: O,
) -> Result<Image, PgmError> {
    load_with(path.as_ref(), |bytes| decode_observed(bytes, observer))
}

fn load_with(
    path: &Path,
    parse: impl FnOnce(&[u8]) -> Result<Image, PgmError>,
) -> Result<Image, PgmError> {
    let bytes =
        fs::read(path).map_err(|e| PgmError::Open(format!("{}: {e}", path.display())))?;

    let image = parse(&bytes).inspect_err(|e| debug!("loading {} failed: {e}", path.display()))?;
    debug!(
        "loaded {} ({}x{}, maxval {})",
        path.display(),
        image.width(),
        image.height(),
        image.maxval()
    );
    Ok(image)
}
