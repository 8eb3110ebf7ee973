use crate::detection::domain::face_geometry::FaceGeometry;
use crate::detection::domain::face_landmark_detector::FaceLandmarkDetector;
use crate::shared::frame::PlanarFrame;

/// Decorator that runs the wrapped detector every N frames.
///
/// Landmark regression is far slower than a preview tick, so in between
/// real detections the most recent result is replayed as-is. The caller
/// never waits for a fresh result.
pub struct CadenceDetector {
    inner: Box<dyn FaceLandmarkDetector>,
    interval: usize,
    frame_count: usize,
    last_faces: Vec<FaceGeometry>,
}

impl CadenceDetector {
    pub fn new(inner: Box<dyn FaceLandmarkDetector>, interval: usize) -> Result<Self, &'static str> {
        if interval < 1 {
            return Err("interval must be >= 1");
        }
        Ok(Self {
            inner,
            interval,
            frame_count: 0,
            last_faces: Vec::new(),
        })
    }
}

impl FaceLandmarkDetector for CadenceDetector {
    fn detect(
        &mut self,
        frame: &PlanarFrame<'_>,
    ) -> Result<Vec<FaceGeometry>, Box<dyn std::error::Error>> {
        let due = self.frame_count % self.interval == 0;
        self.frame_count += 1;
        if due {
            // on error the previous result stays cached for later frames
            self.last_faces = self.inner.detect(frame)?;
        }
        Ok(self.last_faces.clone())
    }
}
