//! Checks applied to user-supplied regions and zoom factors.
//!
//! Both validators report recoverable input errors: the caller is expected
//! to show the message and ask again. Nothing is mutated on rejection.
//!
//! # Region bounds
//!
//! [`ValidationMode::Compatible`] accepts a region unless
//! `lower_right.x < 0`, `lower_right.x > width`, `upper_left.x < 0` or
//! `upper_left.y > height`. Corner ordering and the vertical extent of
//! `lower_right` are not looked at, so an accepted region can still be
//! unusable by [`crate::try_crop`]. [`ValidationMode::Strict`] closes those
//! gaps.
//!
//! # Zoom factor
//!
//! The factor is checked against the full size of the buffer it will be
//! applied to, not against the region.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::region::Region;
use crate::{MAX_HEIGHT, MAX_WIDTH};

/// Rejected user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A corner lies outside the image.
    #[error(
        "Lower right and upper left points should both be within range [0, 0] - [{width}, {height}]"
    )]
    RegionOutOfBounds { width: u32, height: u32 },

    /// The corners don't enclose any pixels (strict mode only).
    #[error("Upper left point must lie above and to the left of the lower right point")]
    EmptyRegion,

    /// Zoom factor is zero or negative.
    #[error("Zoom factor needs to be a positive number, greater than 0")]
    ZoomNotPositive,

    /// Zoomed image would exceed the size limit.
    #[error(
        "Zoom factor {factor} is too big, resulting image would be bigger than [{max_width}x{max_height}]"
    )]
    ZoomTooLarge {
        factor: i64,
        max_width: u32,
        max_height: u32,
    },
}

/// How thoroughly regions are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// The historical, partial bounds check.
    #[default]
    Compatible,
    /// Every corner inside the image and a non-empty extent.
    Strict,
}

/// Check a region against a `(width, height)` image.
pub fn check_region(
    dimensions: (u32, u32),
    region: &Region,
    mode: ValidationMode,
) -> Result<(), ValidationError> {
    let (width, height) = dimensions;
    let (w, h) = (i64::from(width), i64::from(height));
    let ul_x = i64::from(region.upper_left.x);
    let ul_y = i64::from(region.upper_left.y);
    let lr_x = i64::from(region.lower_right.x);
    let lr_y = i64::from(region.lower_right.y);

    let out_of_bounds = match mode {
        ValidationMode::Compatible => lr_x < 0 || lr_x > w || ul_x < 0 || ul_y > h,
        ValidationMode::Strict => {
            ul_x < 0 || ul_y < 0 || lr_x < 0 || lr_y < 0 || ul_x > w || lr_x > w || ul_y > h || lr_y > h
        }
    };
    if out_of_bounds {
        return Err(ValidationError::RegionOutOfBounds { width, height });
    }

    if mode == ValidationMode::Strict && region.positive_extent().is_none() {
        return Err(ValidationError::EmptyRegion);
    }

    Ok(())
}

/// Region check in [`ValidationMode::Compatible`], reduced to accept/reject.
pub fn validate_region(dimensions: (u32, u32), region: &Region) -> bool {
    check_region(dimensions, region, ValidationMode::Compatible).is_ok()
}

/// Check a zoom factor against the size of the buffer it will scale.
///
/// # Arguments
///
/// * `dimensions` - `(width, height)` of the buffer about to be zoomed
/// * `factor` - Requested factor, as typed by the user
///
/// # Returns
///
/// The factor as an unsigned value, ready for [`zoom_in`](crate::zoom_in).
///
/// # Behavior
///
/// - Zero and negative factors are rejected with [`ValidationError::ZoomNotPositive`]
/// - The zoomed width and height must not exceed [`MAX_WIDTH`] and
///   [`MAX_HEIGHT`]; overflowing products count as too large
pub fn check_zoom_factor(dimensions: (u32, u32), factor: i64) -> Result<u32, ValidationError> {
    if factor <= 0 {
        return Err(ValidationError::ZoomNotPositive);
    }

    let too_large = ValidationError::ZoomTooLarge {
        factor,
        max_width: MAX_WIDTH,
        max_height: MAX_HEIGHT,
    };

    let (width, height) = dimensions;
    let new_width = factor.checked_mul(i64::from(width));
    let new_height = factor.checked_mul(i64::from(height));
    match (new_width, new_height) {
        (Some(w), Some(h)) if w <= i64::from(MAX_WIDTH) && h <= i64::from(MAX_HEIGHT) => {
            u32::try_from(factor).map_err(|_| too_large)
        }
        _ => Err(too_large),
    }
}

/// Zoom factor check reduced to accept/reject.
pub fn validate_zoom_factor(dimensions: (u32, u32), factor: i64) -> bool {
    check_zoom_factor(dimensions, factor).is_ok()
}
