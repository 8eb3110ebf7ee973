use crate::assets::domain::sprite_asset::SpriteAsset;
use crate::compositing::domain::blit_variant::BlitVariant;
use crate::compositing::domain::sprite_blitter::SpriteBlitter;
use crate::detection::domain::landmark_mapper::Anchor;
use crate::shared::frame::PlanarFrame;

use super::luma_key_blitter::LumaKeyBlitter;
use super::yuv_key_blitter::YuvKeyBlitter;

/// Composites `sprite` using the blitter a catalog entry asks for.
///
/// Blitters are plain parameter holders, so building one per call costs
/// nothing and keeps the per-frame path allocation free.
pub fn blit(variant: BlitVariant, frame: &mut PlanarFrame<'_>, sprite: &SpriteAsset, anchor: Anchor) {
    match variant {
        BlitVariant::LumaKey(params) => LumaKeyBlitter::new(params).blit(frame, sprite, anchor),
        BlitVariant::YuvKey(params) => YuvKeyBlitter::new(params).blit(frame, sprite, anchor),
    }
}
