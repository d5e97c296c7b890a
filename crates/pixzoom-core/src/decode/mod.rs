//! Image loading for pixzoom.
//!
//! Reads plain-text (ASCII) PGM and PPM files into a
//! [`PixelBuffer`](crate::PixelBuffer). The binary variants `P5` and `P6`
//! are not supported.
//!
//! # Format
//!
//! ```text
//! P3          magic: P2 = grayscale, P3 = color
//! 4 4         width height
//! 255         maximum sample value
//! 0 0 0 ...   width * height * channels samples, row-major, interleaved
//! ```
//!
//! Images larger than [`MAX_WIDTH`](crate::MAX_WIDTH) x
//! [`MAX_HEIGHT`](crate::MAX_HEIGHT) are rejected.

mod pnm;

pub use pnm::{decode_pnm, load_pnm, DecodeError};
