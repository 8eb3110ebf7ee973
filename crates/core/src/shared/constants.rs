/// Number of points produced by the 68-point facial landmark predictor.
pub const LANDMARK_COUNT: usize = 68;

/// Preview resolution the camera glue negotiates by default.
pub const DEFAULT_PREVIEW_WIDTH: u32 = 176;
pub const DEFAULT_PREVIEW_HEIGHT: u32 = 144;

/// Neutral chroma value (no color cast).
pub const NEUTRAL_CHROMA: u8 = 128;
