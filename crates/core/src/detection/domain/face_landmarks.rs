//! 68-point facial landmarks (iBUG 300-W ordering) in landmark space.
//!
//! Landmark space is the predictor's native convention: its axes are
//! transposed and mirrored relative to the frame buffer. Points must go
//! through [`LandmarkMapper`](super::landmark_mapper::LandmarkMapper)
//! before they address frame pixels.

use thiserror::Error;

use crate::shared::constants::LANDMARK_COUNT;

pub const LEFT_BROW_INNER: usize = 19;
pub const RIGHT_BROW_INNER: usize = 24;
pub const NOSE_BRIDGE: usize = 27;
pub const NOSE_TIP: usize = 30;
pub const NOSE_BOTTOM: usize = 33;
pub const UPPER_LIP_TOP: usize = 51;
pub const LOWER_LIP_BOTTOM: usize = 57;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LandmarkError {
    #[error("expected 68 landmark points, got {0}")]
    PointCount(usize),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LandmarkPoint {
    pub x: i32,
    pub y: i32,
}

impl LandmarkPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceLandmarks {
    points: [LandmarkPoint; LANDMARK_COUNT],
}

impl FaceLandmarks {
    pub fn new(points: [LandmarkPoint; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    pub fn from_points(points: &[LandmarkPoint]) -> Result<Self, LandmarkError> {
        let points: [LandmarkPoint; LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| LandmarkError::PointCount(points.len()))?;
        Ok(Self { points })
    }

    pub fn points(&self) -> &[LandmarkPoint; LANDMARK_COUNT] {
        &self.points
    }

    pub fn part(&self, index: usize) -> Option<LandmarkPoint> {
        self.points.get(index).copied()
    }

    /// Vertical gap between the outer upper and lower lip, in landmark units.
    pub fn mouth_gap(&self) -> i64 {
        (self.points[UPPER_LIP_TOP].y as i64 - self.points[LOWER_LIP_BOTTOM].y as i64).abs()
    }
}
