//! Planet surface geometry.

use crate::error::GridError;
use glam::IVec2;
use serde::Serialize;

/// Largest coordinate value accepted for a planet size or a robot position.
pub const MAX_COORDINATE: i32 = 50;

/// The extent of a planet's surface.
///
/// `width` and `height` are the coordinates of the upper-right corner, so the
/// grid spans `(width + 1) x (height + 1)` points with `(0, 0)` at the lower left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Size {
    width: i32,
    height: i32,
}

impl Size {
    /// Creates a size, rejecting negative components or components above [`MAX_COORDINATE`].
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        let valid = |v: i32| (0..=MAX_COORDINATE).contains(&v);
        if !valid(width) || !valid(height) {
            return Err(GridError::OutOfRange {
                width,
                height,
                max: MAX_COORDINATE,
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The upper-right corner of the grid.
    pub fn corner(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }
}

/// Returns true when `position` lies on the grid, upper bounds inclusive.
pub fn is_within_bounds(position: IVec2, area: Size) -> bool {
    position.cmpge(IVec2::ZERO).all() && position.cmple(area.corner()).all()
}
