//! Cropping to a pixel-aligned region.
//!
//! The region's `upper_left` corner becomes `(0, 0)` of the result and
//! `lower_right` is exclusive:
//!
//! ```text
//! new_width  = lower_right.x - upper_left.x
//! new_height = lower_right.y - upper_left.y
//! ```

use tracing::{debug, trace};

use super::TransformError;
use crate::buffer::PixelBuffer;
use crate::index::offset;
use crate::region::Region;

/// Crop `image` to `region`, consuming it.
///
/// # Arguments
///
/// * `image` - Source buffer, dropped once the copy is made
/// * `region` - Area to keep; `upper_left` inclusive, `lower_right` exclusive
///
/// # Returns
///
/// A buffer of `region.extent()` pixels whose `(0, 0)` is the region's upper
/// left corner.
///
/// # Behavior
///
/// - Rows are copied whole, one slice per output row
/// - A region covering the full image returns `image` without copying
/// - Channel layout and maximum value are kept
///
/// # Panics
///
/// If the region is empty, inverted, or reads outside the image. Use
/// [`try_crop`] when the region has not been checked with
/// [`ValidationMode::Strict`](crate::ValidationMode::Strict).
pub fn crop(image: PixelBuffer, region: &Region) -> PixelBuffer {
    match try_crop(image, region) {
        Ok(cropped) => cropped,
        Err(e) => panic!("crop precondition violated: {e}"),
    }
}

/// Check that `region` can be cut out of a `(width, height)` image.
///
/// Returns the `(columns, rows)` of the result. Unlike
/// [`check_region`](crate::check_region) this looks at every bound the copy
/// depends on.
pub fn check_crop(dimensions: (u32, u32), region: &Region) -> Result<(u32, u32), TransformError> {
    let (width, height) = dimensions;
    let (columns, rows) = region.positive_extent().ok_or_else(|| {
        let (columns, rows) = region.extent();
        TransformError::EmptyRegion { columns, rows }
    })?;

    let left = i64::from(region.upper_left.x);
    let top = i64::from(region.upper_left.y);
    if left < 0
        || top < 0
        || left + i64::from(columns) > i64::from(width)
        || top + i64::from(rows) > i64::from(height)
    {
        return Err(TransformError::RegionOutsideImage {
            x0: region.upper_left.x,
            y0: region.upper_left.y,
            x1: region.lower_right.x,
            y1: region.lower_right.y,
            width,
            height,
        });
    }

    Ok((columns, rows))
}

/// Crop `image` to `region`, consuming it.
///
/// A region equal to the full bounds returns the input buffer untouched.
pub fn try_crop(image: PixelBuffer, region: &Region) -> Result<PixelBuffer, TransformError> {
    let (width, height) = image.dimensions();

    // Fast path: nothing to cut off
    if region.is_full(width, height) {
        trace!(width, height, "Crop covers the whole image");
        return Ok(image);
    }

    let (columns, rows) = check_crop((width, height), region)?;
    let (left, top) = (region.upper_left.x as usize, region.upper_left.y as usize);

    debug!(
        width,
        height,
        left,
        top,
        columns,
        rows,
        "Cropping image"
    );

    let channels = image.channels();
    let channel_count = channels.count();
    let row_len = columns as usize * channel_count;
    let src = image.samples();

    let mut output = Vec::with_capacity(row_len * rows as usize);

    // Each source row segment is contiguous, copy it in one go
    for row in 0..rows as usize {
        let start = offset(top + row, left, 0, width as usize, channel_count);
        output.extend_from_slice(&src[start..start + row_len]);
    }

    Ok(PixelBuffer::from_parts(
        columns,
        rows,
        channels,
        image.max_value(),
        output,
    ))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
