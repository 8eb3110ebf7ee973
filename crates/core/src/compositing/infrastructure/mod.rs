pub mod blitter_factory;
pub mod landmark_marker;
pub mod luma_key_blitter;
pub mod yuv_key_blitter;
