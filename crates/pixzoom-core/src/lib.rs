//! Pixzoom Core - pixel buffer transforms for plain-text PNM images
//!
//! This crate loads plain-text PGM/PPM images into a flat, channel-interleaved
//! [`PixelBuffer`], applies geometric transforms to a selected region, and
//! writes the result back out.
//!
//! # Module Structure
//!
//! - `buffer` - The pixel model and its invariants
//! - `index` - `(row, col, channel)` to sample offset mapping
//! - `region` / `validate` - Selection rectangles and input checks
//! - `transform` - Crop, flips and integer zoom
//! - `decode` / `encode` - Plain PNM parsing, serialization, PNG preview
//! - `pipeline` - The whole edit sequence in one call

pub mod buffer;
pub mod decode;
pub mod encode;
pub mod index;
pub mod pipeline;
pub mod region;
pub mod transform;
pub mod validate;

pub use buffer::{BufferError, Channels, PixelBuffer};
pub use pipeline::{apply_plan, EditPlan, Operation, PipelineError};
pub use region::{Point2d, Region};
pub use transform::{
    check_crop, crop, flip_horizontal, flip_vertical, try_crop, try_zoom_in, zoom_in, zoom_region,
    TransformError,
};
pub use validate::{
    check_region, check_zoom_factor, validate_region, validate_zoom_factor, ValidationError,
    ValidationMode,
};

/// Largest image width accepted on load or produced by zoom.
pub const MAX_WIDTH: u32 = 500;

/// Largest image height accepted on load or produced by zoom.
pub const MAX_HEIGHT: u32 = 500;

#[cfg(test)]
mod tests {
    use super::*;

    /// The 4x4 grayscale walkthrough: flip, crop and zoom of a 0..16 ramp.
    fn ramp_4x4() -> PixelBuffer {
        PixelBuffer::new(4, 4, Channels::Grayscale, 255, (0..16).collect()).unwrap()
    }

    #[test]
    fn test_ramp_flip_horizontal() {
        let mut img = ramp_4x4();
        flip_horizontal(&mut img);
        assert_eq!(&img.samples()[0..4], &[3, 2, 1, 0]);
        assert_eq!(&img.samples()[12..16], &[15, 14, 13, 12]);
    }

    #[test]
    fn test_ramp_crop_and_zoom() {
        let region = Region::from_corners(1, 1, 3, 3);
        assert!(validate_region(ramp_4x4().dimensions(), &region));

        let img = crop(ramp_4x4(), &region);
        assert_eq!(img.samples(), &[5, 6, 9, 10]);

        assert!(validate_zoom_factor(img.dimensions(), 2));
        let img = zoom_region(img, &region, 2);

        assert_eq!(img.dimensions(), (4, 4));
        for (row, col, expected) in [(0, 0, 5), (1, 1, 5), (0, 3, 6), (3, 0, 9), (2, 3, 10)] {
            assert_eq!(img.sample(row, col, 0), expected);
        }
    }
}
