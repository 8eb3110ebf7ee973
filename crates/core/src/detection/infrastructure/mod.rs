pub mod cadence_detector;
pub mod replay_detector;
