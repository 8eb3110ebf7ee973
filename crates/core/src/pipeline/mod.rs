pub mod gesture_tracker;
pub mod infrastructure;
pub mod overlay_mode;
pub mod overlay_pipeline;
pub mod pipeline_config;
pub mod pipeline_logger;
pub mod pipeline_state;
pub mod readiness;
