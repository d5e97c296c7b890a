//! Non-interactive edit sequence.
//!
//! [`apply_plan`] runs the steps of an editing session once every answer is
//! known up front. The binary gathers answers from flags or prompts and then
//! hands them over here:
//! 1. Validate the region and crop to it
//! 2. Vertical flip
//! 3. Horizontal flip
//! 4. Validate the zoom factor against the cropped image and zoom

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::buffer::PixelBuffer;
use crate::region::Region;
use crate::transform::{flip_horizontal, flip_vertical, try_crop, try_zoom_in, TransformError};
use crate::validate::{check_region, check_zoom_factor, ValidationError, ValidationMode};

/// Errors from running an [`EditPlan`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The region or zoom factor was rejected.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The region passed validation but can't be applied.
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Every answer of an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditPlan {
    /// Area to keep.
    pub region: Region,
    /// Mirror top-bottom after cropping.
    pub flip_vertical: bool,
    /// Mirror left-right after cropping.
    pub flip_horizontal: bool,
    /// Integer zoom factor, if zooming.
    pub zoom: Option<u32>,
    /// Region bounds checking.
    pub mode: ValidationMode,
}

impl EditPlan {
    /// Plan that only crops to `region`.
    pub fn crop(region: Region) -> Self {
        Self {
            region,
            ..Default::default()
        }
    }
}

/// A single step applied by [`apply_plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Crop { region: Region },
    FlipVertical,
    FlipHorizontal,
    Zoom { factor: u32 },
}

/// Run `plan` on `image`, returning the result and the steps taken.
pub fn apply_plan(
    image: PixelBuffer,
    plan: &EditPlan,
) -> Result<(PixelBuffer, Vec<Operation>), PipelineError> {
    let mut applied = Vec::with_capacity(4);

    check_region(image.dimensions(), &plan.region, plan.mode)?;
    let mut image = try_crop(image, &plan.region)?;
    applied.push(Operation::Crop {
        region: plan.region,
    });

    if plan.flip_vertical {
        flip_vertical(&mut image);
        applied.push(Operation::FlipVertical);
    }

    if plan.flip_horizontal {
        flip_horizontal(&mut image);
        applied.push(Operation::FlipHorizontal);
    }

    if let Some(factor) = plan.zoom {
        let factor = check_zoom_factor(image.dimensions(), i64::from(factor))?;
        let source = plan.region.positive_extent().ok_or_else(|| {
            let (columns, rows) = plan.region.extent();
            TransformError::EmptyRegion { columns, rows }
        })?;
        image = try_zoom_in(image, source, factor)?;
        applied.push(Operation::Zoom { factor });
    }

    let (width, height) = image.dimensions();
    info!(width, height, steps = applied.len(), "Edit plan applied");

    Ok((image, applied))
}
