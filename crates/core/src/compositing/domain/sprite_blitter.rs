use crate::assets::domain::sprite_asset::SpriteAsset;
use crate::detection::domain::landmark_mapper::Anchor;
use crate::shared::frame::PlanarFrame;

/// Domain interface for compositing one sprite into a frame.
///
/// Implementations write in place, never resize the frame, and skip every
/// sample whose source or destination falls outside its plane.
pub trait SpriteBlitter {
    fn blit(&self, frame: &mut PlanarFrame<'_>, sprite: &SpriteAsset, anchor: Anchor);
}
