use crate::shared::frame::PlanarFrame;

use super::face_geometry::FaceGeometry;

/// Domain interface for the external face detector + landmark predictor.
///
/// Given a frame, returns zero or more faces, each optionally carrying
/// its 68 landmarks. Implementations may be stateful (cadence control,
/// caching), hence `&mut self`.
pub trait FaceLandmarkDetector: Send {
    fn detect(
        &mut self,
        frame: &PlanarFrame<'_>,
    ) -> Result<Vec<FaceGeometry>, Box<dyn std::error::Error>>;
}
