//! Plain-text PGM/PPM serialization.
//!
//! Output layout: the magic token, width, height and maximum value each on
//! their own line, followed by one sample per line.

use std::fmt;
use std::path::Path;

use tracing::debug;

use super::EncodeError;
use crate::buffer::PixelBuffer;

/// Serialize a buffer as plain-text PGM (grayscale) or PPM (color).
pub fn encode_pnm(image: &PixelBuffer) -> Result<String, EncodeError> {
    // Up to 5 digits and a newline per sample
    let mut out = String::with_capacity(32 + image.samples().len() * 6);
    write_pnm(&mut out, image).map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
    Ok(out)
}

fn write_pnm(out: &mut impl fmt::Write, image: &PixelBuffer) -> fmt::Result {
    writeln!(out, "{}", image.channels().magic())?;
    writeln!(out, "{}", image.width())?;
    writeln!(out, "{}", image.height())?;
    writeln!(out, "{}", image.max_value())?;
    for sample in image.samples() {
        writeln!(out, "{sample}")?;
    }
    Ok(())
}

/// Write a buffer to `path` as plain-text PGM/PPM, replacing any existing file.
pub fn save_pnm(image: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let (width, height) = image.dimensions();
    debug!(width, height, path = %path.display(), "Writing plain PNM image");

    let text = encode_pnm(image)?;
    std::fs::write(path, text)
        .map_err(|e| EncodeError::IoError(format!("{}: {}", path.display(), e)))
}
