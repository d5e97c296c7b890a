//! Image writing for pixzoom.
//!
//! This module provides functionality for:
//! - Serializing a buffer back to plain-text PGM/PPM
//! - Encoding a PNG preview via the `image` crate
//!
//! # Examples
//!
//! ```ignore
//! use pixzoom_core::encode::{encode_pnm, save_pnm};
//!
//! let text = encode_pnm(&image)?;
//! save_pnm(&image, "result.ppm").unwrap();
//! ```

mod png;
mod pnm;

pub use png::{encode_png, save_png};
pub use pnm::{encode_pnm, save_pnm};

use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The buffer can't be represented in the target format.
    #[error("Unsupported image for encoding: {0}")]
    Unsupported(String),

    /// The encoder itself failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// I/O error during file writing.
    #[error("I/O error: {0}")]
    IoError(String),
}
