use crate::compositing::infrastructure::landmark_marker::DEFAULT_MARKER_SIZE;

/// Detector runs every frame unless configured otherwise.
pub const DEFAULT_DETECTION_INTERVAL: usize = 1;

/// Gestures are sampled once every this many frames.
pub const DEFAULT_GESTURE_INTERVAL: usize = 9;

/// Nose displacement must exceed face width / this to count as a head turn.
pub const DEFAULT_HEAD_TURN_DIVISOR: i32 = 12;

/// Lip gap must exceed face height / this to count as an open mouth.
pub const DEFAULT_MOUTH_OPEN_DIVISOR: i32 = 6;

/// Tunable knobs of the overlay pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    pub detection_interval: usize,
    pub gesture_interval: usize,
    pub head_turn_divisor: i32,
    pub mouth_open_divisor: i32,
    pub marker_size: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            detection_interval: DEFAULT_DETECTION_INTERVAL,
            gesture_interval: DEFAULT_GESTURE_INTERVAL,
            head_turn_divisor: DEFAULT_HEAD_TURN_DIVISOR,
            mouth_open_divisor: DEFAULT_MOUTH_OPEN_DIVISOR,
            marker_size: DEFAULT_MARKER_SIZE,
        }
    }
}
