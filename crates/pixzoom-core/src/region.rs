//! Selection rectangles.
//!
//! Coordinates are in pixels with the origin at the top-left corner:
//! `x` is the column, `y` the row. `lower_right` is exclusive, so the region
//! `(0, 0) - (width, height)` covers the whole image.

use serde::{Deserialize, Serialize};

/// Integer 2-D point (`x` = column, `y` = row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point2d {
    pub x: i32,
    pub y: i32,
}

impl Point2d {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rectangular selection given by two corners.
///
/// Nothing about a `Region` is guaranteed on construction; it is checked
/// against a buffer with [`crate::check_region`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Region {
    pub upper_left: Point2d,
    pub lower_right: Point2d,
}

impl Region {
    pub fn new(upper_left: Point2d, lower_right: Point2d) -> Self {
        Self {
            upper_left,
            lower_right,
        }
    }

    /// Region from raw corner coordinates `(x0, y0) - (x1, y1)`.
    pub fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point2d::new(x0, y0), Point2d::new(x1, y1))
    }

    /// Region covering a whole `width x height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(
            Point2d::new(0, 0),
            Point2d::new(saturating_i32(width), saturating_i32(height)),
        )
    }

    /// `(columns, rows)` spanned by the region. Either may be zero or negative.
    pub fn extent(&self) -> (i64, i64) {
        (
            i64::from(self.lower_right.x) - i64::from(self.upper_left.x),
            i64::from(self.lower_right.y) - i64::from(self.upper_left.y),
        )
    }

    /// Positive `(columns, rows)`, or `None` if the region is empty or inverted.
    pub fn positive_extent(&self) -> Option<(u32, u32)> {
        let (columns, rows) = self.extent();
        if columns <= 0 || rows <= 0 {
            return None;
        }
        Some((u32::try_from(columns).ok()?, u32::try_from(rows).ok()?))
    }

    /// Whether the region is exactly the full bounds of a `width x height` image.
    pub fn is_full(&self, width: u32, height: u32) -> bool {
        self.upper_left == Point2d::new(0, 0)
            && i64::from(self.lower_right.x) == i64::from(width)
            && i64::from(self.lower_right.y) == i64::from(height)
    }
}

fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
