//! Real-time sticker and color-filter compositing for NV12 camera previews.
//!
//! Frames are mutated in place through [`shared::frame::PlanarFrame`]; the
//! per-frame entry point is [`pipeline::overlay_pipeline::OverlayPipeline`].

pub mod assets;
pub mod compositing;
pub mod detection;
pub mod filtering;
pub mod pipeline;
pub mod shared;
