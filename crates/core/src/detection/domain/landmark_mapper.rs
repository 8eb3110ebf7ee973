use super::face_geometry::FaceGeometry;
use super::face_landmarks::{FaceLandmarks, LandmarkPoint};

/// A frame-space point a sprite is centered on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
}

impl Anchor {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// Maps landmark-space points into frame space.
///
/// The predictor sees the sensor image rotated by 90 degrees and mirrored,
/// so a point's second coordinate is the frame column and its first,
/// flipped against the frame height, is the frame row. The same transform
/// applies to every sticker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LandmarkMapper {
    frame_height: i32,
}

impl LandmarkMapper {
    pub fn new(frame_height: u32) -> Self {
        Self {
            frame_height: frame_height as i32,
        }
    }

    /// Saturates at the `i32` range, so detector garbage lands far off-frame.
    pub fn to_frame(&self, point: LandmarkPoint) -> Anchor {
        Anchor::new(point.y, self.frame_height.saturating_sub(point.x))
    }

    /// Frame position of landmark `index`, or `None` if the index is unknown.
    pub fn anchor_for(&self, shape: &FaceLandmarks, index: usize) -> Option<Anchor> {
        shape.part(index).map(|p| self.to_frame(p))
    }

    /// Every landmark of a face, mapped.
    pub fn all_anchors(&self, shape: &FaceLandmarks) -> Vec<Anchor> {
        shape.points().iter().map(|&p| self.to_frame(p)).collect()
    }

    /// Anchor of landmark `index` for each face that has landmarks.
    ///
    /// Empty when nothing was detected.
    pub fn anchors(&self, faces: &[FaceGeometry], index: usize) -> Vec<Anchor> {
        faces
            .iter()
            .filter_map(|f| f.landmarks.as_ref())
            .filter_map(|lm| self.anchor_for(lm, index))
            .collect()
    }
}
