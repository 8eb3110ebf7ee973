use crate::detection::domain::face_geometry::FaceGeometry;
use crate::detection::domain::face_landmarks::{LandmarkPoint, NOSE_BOTTOM};

use super::pipeline_config::PipelineConfig;

/// Gestures seen on one sampled frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureEvents {
    pub head_turn: bool,
    pub mouth_open: bool,
}

/// Watches the first face for head turns and an open mouth.
///
/// Checks run once every `interval` observed frames, starting with the
/// first one. The nose reference is refreshed on every observed frame, so
/// a head turn compares the sampled frame against the frame just before it.
/// All measurements are in landmark space.
#[derive(Clone, Debug)]
pub struct GestureTracker {
    interval: usize,
    head_turn_divisor: i32,
    mouth_open_divisor: i32,
    frame_count: usize,
    previous_nose: Option<LandmarkPoint>,
}

impl GestureTracker {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            interval: config.gesture_interval.max(1),
            head_turn_divisor: config.head_turn_divisor.max(1),
            mouth_open_divisor: config.mouth_open_divisor.max(1),
            frame_count: 0,
            previous_nose: None,
        }
    }

    /// Feeds one frame's first face. Faces without landmarks are ignored.
    pub fn observe(&mut self, face: &FaceGeometry) -> GestureEvents {
        let Some(landmarks) = face.landmarks.as_ref() else {
            return GestureEvents::default();
        };
        let Some(nose) = landmarks.part(NOSE_BOTTOM) else {
            return GestureEvents::default();
        };

        let sample = self.frame_count % self.interval == 0;
        self.frame_count += 1;

        let mut events = GestureEvents::default();
        if sample {
            if let Some(previous) = self.previous_nose {
                let shift = (nose.x as i64 - previous.x as i64).abs();
                events.head_turn = shift > face.rect.width() / self.head_turn_divisor as i64;
            }
            events.mouth_open =
                landmarks.mouth_gap() > face.rect.height() / self.mouth_open_divisor as i64;
        }
        self.previous_nose = Some(nose);
        events
    }

    /// Forgets the nose reference and restarts the sampling cycle.
    pub fn reset(&mut self) {
        self.frame_count = 0;
        self.previous_nose = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::face_geometry::FaceRect;
    use crate::detection::domain::face_landmarks::{
        FaceLandmarks, LOWER_LIP_BOTTOM, UPPER_LIP_TOP,
    };
    use crate::shared::constants::LANDMARK_COUNT;

    /// 120x120 face: head turns need > 10, open mouth needs > 20.
    fn face(nose_x: i32, mouth_gap: i32) -> FaceGeometry {
        let mut points = [LandmarkPoint::new(60, 60); LANDMARK_COUNT];
        points[NOSE_BOTTOM] = LandmarkPoint::new(nose_x, 60);
        points[UPPER_LIP_TOP] = LandmarkPoint::new(60, 80);
        points[LOWER_LIP_BOTTOM] = LandmarkPoint::new(60, 80 + mouth_gap);
        FaceGeometry::new(
            FaceRect::new(0, 120, 0, 120),
            Some(FaceLandmarks::new(points)),
        )
    }

    fn tracker(interval: usize) -> GestureTracker {
        GestureTracker::new(&PipelineConfig {
            gesture_interval: interval,
            ..PipelineConfig::default()
        })
    }

    #[test]
    fn test_first_sample_has_no_head_turn() {
        let mut t = tracker(1);
        assert!(!t.observe(&face(200, 0)).head_turn);
    }

    #[test]
    fn test_head_turn_above_threshold() {
        let mut t = tracker(1);
        t.observe(&face(60, 0));
        assert!(t.observe(&face(71, 0)).head_turn);
    }

    #[test]
    fn test_head_turn_at_threshold_is_ignored() {
        let mut t = tracker(1);
        t.observe(&face(60, 0));
        assert!(!t.observe(&face(50, 0)).head_turn);
    }

    #[test]
    fn test_mouth_open_above_threshold() {
        let mut t = tracker(1);
        assert!(t.observe(&face(60, 21)).mouth_open);
        assert!(!t.observe(&face(60, 20)).mouth_open);
    }

    #[test]
    fn test_only_every_interval_frame_is_sampled() {
        let mut t = tracker(3);
        assert!(t.observe(&face(60, 30)).mouth_open);
        assert!(!t.observe(&face(60, 30)).mouth_open);
        assert!(!t.observe(&face(60, 30)).mouth_open);
        assert!(t.observe(&face(60, 30)).mouth_open);
    }

    #[test]
    fn test_nose_reference_updates_between_samples() {
        let mut t = tracker(2);
        t.observe(&face(0, 0));
        // unsampled, but moves the reference close to the next sample
        t.observe(&face(95, 0));
        assert!(!t.observe(&face(100, 0)).head_turn);
    }

    #[test]
    fn test_face_without_landmarks_is_ignored() {
        let mut t = tracker(1);
        let bare = FaceGeometry::new(FaceRect::new(0, 120, 0, 120), None);
        assert_eq!(t.observe(&bare), GestureEvents::default());
        assert!(!t.observe(&face(200, 0)).head_turn);
    }

    #[test]
    fn test_extreme_nose_jump_is_a_head_turn() {
        let mut t = tracker(1);
        t.observe(&face(i32::MIN, 0));
        assert!(t.observe(&face(i32::MAX, 0)).head_turn);
    }

    #[test]
    fn test_extreme_lips_and_box_do_not_overflow() {
        let mut points = [LandmarkPoint::new(60, 60); LANDMARK_COUNT];
        points[UPPER_LIP_TOP] = LandmarkPoint::new(0, i32::MIN);
        points[LOWER_LIP_BOTTOM] = LandmarkPoint::new(0, i32::MAX);
        let tall = FaceGeometry::new(
            FaceRect::new(i32::MIN, i32::MAX, i32::MIN, i32::MAX),
            Some(FaceLandmarks::new(points)),
        );
        let mut t = tracker(1);
        assert!(t.observe(&tall).mouth_open);
        assert!(!t.observe(&tall).head_turn);
    }

    #[test]
    fn test_reset_clears_reference() {
        let mut t = tracker(1);
        t.observe(&face(0, 0));
        t.reset();
        assert!(!t.observe(&face(200, 0)).head_turn);
    }
}
