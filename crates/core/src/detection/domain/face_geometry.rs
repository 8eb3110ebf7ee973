use super::face_landmarks::FaceLandmarks;

/// Axis-aligned face box in the detector's coordinate convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceRect {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl FaceRect {
    pub fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Converts a box reported by the camera's face detector.
    ///
    /// The camera reports `(x, y, width, height)` with its axes swapped
    /// relative to the landmark predictor, so x becomes the top edge and
    /// y is mirrored against the frame height.
    pub fn from_sensor(x: i32, y: i32, width: i32, height: i32, frame_height: i32) -> Self {
        Self {
            top: x,
            bottom: x.saturating_add(height),
            right: frame_height.saturating_sub(y),
            left: frame_height.saturating_sub(y).saturating_sub(width),
        }
    }

    /// Signed extent; widened so any pair of edges fits.
    pub fn width(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    pub fn height(&self) -> i64 {
        self.bottom as i64 - self.top as i64
    }
}

/// One detected face: its box plus landmarks when regression has run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceGeometry {
    pub rect: FaceRect,
    pub landmarks: Option<FaceLandmarks>,
}

impl FaceGeometry {
    pub fn new(rect: FaceRect, landmarks: Option<FaceLandmarks>) -> Self {
        Self { rect, landmarks }
    }
}
