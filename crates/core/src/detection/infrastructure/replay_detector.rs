use crate::detection::domain::face_geometry::FaceGeometry;
use crate::detection::domain::face_landmark_detector::FaceLandmarkDetector;
use crate::shared::frame::PlanarFrame;

/// Replays pre-computed detection results.
///
/// Results are returned in order, one per call; once exhausted the last
/// entry is repeated, matching how a live pipeline keeps using the most
/// recent detection. Used by the headless driver and by tests.
pub struct ReplayDetector {
    script: Vec<Vec<FaceGeometry>>,
    cursor: usize,
}

impl ReplayDetector {
    pub fn new(script: Vec<Vec<FaceGeometry>>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Returns the same faces on every call.
    pub fn fixed(faces: Vec<FaceGeometry>) -> Self {
        Self::new(vec![faces])
    }
}

impl FaceLandmarkDetector for ReplayDetector {
    fn detect(
        &mut self,
        _frame: &PlanarFrame<'_>,
    ) -> Result<Vec<FaceGeometry>, Box<dyn std::error::Error>> {
        let Some(last) = self.script.len().checked_sub(1) else {
            return Ok(Vec::new());
        };
        let faces = self.script[self.cursor].clone();
        if self.cursor < last {
            self.cursor += 1;
        }
        Ok(faces)
    }
}
