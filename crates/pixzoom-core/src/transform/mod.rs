//! Geometric transforms: crop, flips and integer zoom.
//!
//! # Ownership
//!
//! Crop and zoom take the current [`PixelBuffer`](crate::PixelBuffer) by
//! value and return its replacement. The caller rebinds its variable to the
//! result, so the old sample storage is dropped exactly once and can't be
//! reached afterwards. Flips permute samples in place through `&mut`.
//!
//! # Order
//!
//! The interactive flow applies transforms as:
//! 1. Crop to the selected region
//! 2. Vertical flip
//! 3. Horizontal flip
//! 4. Zoom, sized from the same region used for the crop
//!
//! # Failure
//!
//! A region or source size that doesn't fit the buffer is a caller bug.
//! [`crop`] and [`zoom_in`] panic on it; the `try_` variants return a
//! [`TransformError`] for callers that pass through loosely checked input.

mod crop;
mod flip;
mod zoom;

pub use crop::{check_crop, crop, try_crop};
pub use flip::{flip_horizontal, flip_vertical};
pub use zoom::{try_zoom_in, zoom_in, zoom_region};

use thiserror::Error;

/// Precondition failures of a transform.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The region spans zero or negative columns or rows.
    #[error("Region of {columns}x{rows} pixels does not enclose any pixels")]
    EmptyRegion { columns: i64, rows: i64 },

    /// The region reads samples outside the source buffer.
    #[error("Region ({x0}, {y0}) - ({x1}, {y1}) reaches outside the {width}x{height} image")]
    RegionOutsideImage {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        width: u32,
        height: u32,
    },

    /// Zoom was sized for a different buffer than the one it received.
    #[error(
        "Zoom source size {source_width}x{source_height} does not match image size {width}x{height}"
    )]
    SourceSizeMismatch {
        source_width: u32,
        source_height: u32,
        width: u32,
        height: u32,
    },

    /// Zoom factor of zero.
    #[error("Zoom factor must be at least 1")]
    ZeroZoomFactor,

    /// Zoomed size would exceed the supported image size.
    #[error(
        "Zooming {width}x{height} by {factor} exceeds the maximum size of {max_width}x{max_height}"
    )]
    OutputTooLarge {
        width: u32,
        height: u32,
        factor: u32,
        max_width: u32,
        max_height: u32,
    },
}
