//! Integer nearest-neighbour zoom.
//!
//! Each source pixel is replicated into a `factor x factor` block:
//!
//! ```text
//! dst(row * factor + dy, col * factor + dx) = src(row, col)   for dx, dy in 0..factor
//! ```
//!
//! Zoom is sized from the selected region rather than from the buffer, so the
//! caller states the `(columns, rows)` it expects and the buffer must match.
//! After a crop to the same region this always holds.

use tracing::{debug, trace};

use super::TransformError;
use crate::buffer::PixelBuffer;
use crate::index::offset;
use crate::region::Region;
use crate::{MAX_HEIGHT, MAX_WIDTH};

/// Zoom `image` by `factor`, consuming it.
///
/// # Arguments
///
/// * `image` - Buffer to scale, usually the result of a crop
/// * `source` - The `(columns, rows)` size the zoom was planned for
/// * `factor` - Integer scale applied to both axes
///
/// # Returns
///
/// A buffer of `(columns * factor, rows * factor)` pixels with the same
/// channel layout and maximum value.
///
/// # Behavior
///
/// - Every source pixel becomes a `factor x factor` block
/// - A factor of 1 returns `image` unchanged, without copying
/// - The zoomed size must stay within [`MAX_WIDTH`] x [`MAX_HEIGHT`]
///
/// # Panics
///
/// If `source` differs from the image dimensions, `factor` is zero, or the
/// zoomed image would be too large. [`try_zoom_in`] reports these as errors.
pub fn zoom_in(image: PixelBuffer, source: (u32, u32), factor: u32) -> PixelBuffer {
    match try_zoom_in(image, source, factor) {
        Ok(zoomed) => zoomed,
        Err(e) => panic!("zoom precondition violated: {e}"),
    }
}

/// Zoom an image that was cropped to `region`.
///
/// # Panics
///
/// If the region is empty or inverted, or doesn't match the image size.
pub fn zoom_region(image: PixelBuffer, region: &Region, factor: u32) -> PixelBuffer {
    let Some(source) = region.positive_extent() else {
        let (columns, rows) = region.extent();
        panic!(
            "zoom precondition violated: {}",
            TransformError::EmptyRegion { columns, rows }
        );
    };
    zoom_in(image, source, factor)
}

/// Zoom `image` by `factor`, reporting precondition failures as errors.
pub fn try_zoom_in(
    image: PixelBuffer,
    source: (u32, u32),
    factor: u32,
) -> Result<PixelBuffer, TransformError> {
    if factor == 0 {
        return Err(TransformError::ZeroZoomFactor);
    }

    let (width, height) = image.dimensions();
    if source != (width, height) {
        return Err(TransformError::SourceSizeMismatch {
            source_width: source.0,
            source_height: source.1,
            width,
            height,
        });
    }

    if factor == 1 {
        trace!(width, height, "Zoom factor 1, nothing to do");
        return Ok(image);
    }

    let zoomed_width = width.checked_mul(factor).filter(|&w| w <= MAX_WIDTH);
    let zoomed_height = height.checked_mul(factor).filter(|&h| h <= MAX_HEIGHT);
    let (Some(zoomed_width), Some(zoomed_height)) = (zoomed_width, zoomed_height) else {
        return Err(TransformError::OutputTooLarge {
            width,
            height,
            factor,
            max_width: MAX_WIDTH,
            max_height: MAX_HEIGHT,
        });
    };

    debug!(width, height, factor, "Zooming in");

    let channels = image.channels();
    let channel_count = channels.count();
    let (columns, rows) = (width as usize, height as usize);
    let k = factor as usize;
    let out_width = zoomed_width as usize;
    let out_height = zoomed_height as usize;

    let src = image.samples();
    let mut output = vec![0u16; out_width * out_height * channel_count];

    for row in 0..rows {
        for col in 0..columns {
            for channel in 0..channel_count {
                let value = src[offset(row, col, channel, columns, channel_count)];

                for dy in 0..k {
                    for dx in 0..k {
                        let dst = offset(
                            row * k + dy,
                            col * k + dx,
                            channel,
                            out_width,
                            channel_count,
                        );
                        output[dst] = value;
                    }
                }
            }
        }
    }

    Ok(PixelBuffer::from_parts(
        zoomed_width,
        zoomed_height,
        channels,
        image.max_value(),
        output,
    ))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::buffer::Channels;
    use proptest::prelude::*;

    fn create_test_image(width: u32, height: u32, channels: Channels) -> PixelBuffer {
        let len = (width * height) as usize * channels.count();
        let samples = (0..len).map(|i| (i * 7 % 65536) as u16).collect();
        PixelBuffer::new(width, height, channels, 65535, samples).unwrap()
    }

    proptest! {
        /// Property: output is exactly factor times larger on each axis.
        #[test]
        fn prop_zoom_dimensions(
            width in 1u32..=20,
            height in 1u32..=20,
            factor in 1u32..=6,
        ) {
            let img = create_test_image(width, height, Channels::Color);
            let result = zoom_in(img, (width, height), factor);

            prop_assert_eq!(result.dimensions(), (width * factor, height * factor));
            prop_assert_eq!(result.samples().len(), (width * height * factor * factor * 3) as usize);
        }

        /// Property: every pixel of a block equals its source pixel.
        #[test]
        fn prop_zoom_blocks_replicate_source(
            width in 1u32..=12,
            height in 1u32..=12,
            factor in 1u32..=5,
            color in any::<bool>(),
        ) {
            let channels = if color { Channels::Color } else { Channels::Grayscale };
            let img = create_test_image(width, height, channels);
            let result = zoom_in(img.clone(), (width, height), factor);

            for r in 0..height * factor {
                for c in 0..width * factor {
                    for ch in 0..channels.count() {
                        prop_assert_eq!(
                            result.sample(r, c, ch),
                            img.sample(r / factor, c / factor, ch)
                        );
                    }
                }
            }
        }
    }
}
