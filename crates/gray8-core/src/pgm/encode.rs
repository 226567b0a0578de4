//! PGM (P5) encoding.

use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use super::PgmError;
use crate::buffer::Image;

/// Encode an image as raw PGM bytes.
///
/// The header is written as `P5\n<width> <height>\n<maxval>\n`, followed
/// by the row-major pixels.
pub fn encode(image: &Image) -> Vec<u8> {
    let header = format!(
        "P5\n{} {}\n{}\n",
        image.width(),
        image.height(),
        image.maxval()
    );
    let pixels = image.as_raw();

    let mut out = Vec::with_capacity(header.len() + pixels.len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(pixels);

    image.record(pixels.len() as u64);
    out
}

/// Save an image as a raw PGM file.
///
/// The data is written to a temporary file in the destination directory
/// and renamed into place, so a failed save never leaves a partial file
/// at `path`.
///
/// # Errors
///
/// Returns [`PgmError::Open`] if the temporary file cannot be created and
/// [`PgmError::Write`] if writing or renaming it fails.
pub fn save(image: &Image, path: impl AsRef<Path>) -> Result<(), PgmError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)
        .map_err(|e| PgmError::Open(format!("{}: {e}", path.display())))?;
    file.write_all(&encode(image))
        .map_err(|e| PgmError::Write(format!("{}: {e}", path.display())))?;
    file.persist(path)
        .map_err(|e| PgmError::Write(format!("{}: {}", path.display(), e.error)))?;

    debug!(
        "saved {} ({}x{}, maxval {})",
        path.display(),
        image.width(),
        image.height(),
        image.maxval()
    );
    Ok(())
}
