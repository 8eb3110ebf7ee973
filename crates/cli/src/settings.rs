use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use selfcam_core::pipeline::pipeline_config::PipelineConfig;

/// Pipeline knobs read from a JSON file. Missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub detection_interval: usize,
    pub gesture_interval: usize,
    pub head_turn_divisor: i32,
    pub mouth_open_divisor: i32,
    pub marker_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        let config = PipelineConfig::default();
        Self {
            detection_interval: config.detection_interval,
            gesture_interval: config.gesture_interval,
            head_turn_divisor: config.head_turn_divisor,
            mouth_open_divisor: config.mouth_open_divisor,
            marker_size: config.marker_size,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read settings {}: {e}", path.display()))?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn into_config(self) -> PipelineConfig {
        PipelineConfig {
            detection_interval: self.detection_interval,
            gesture_interval: self.gesture_interval,
            head_turn_divisor: self.head_turn_divisor,
            mouth_open_divisor: self.mouth_open_divisor,
            marker_size: self.marker_size,
        }
    }
}
