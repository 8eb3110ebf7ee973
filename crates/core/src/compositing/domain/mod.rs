pub mod blit_variant;
pub mod sprite_blitter;
