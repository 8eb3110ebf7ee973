use crate::assets::domain::sprite_asset::SpriteAsset;
use crate::compositing::domain::blit_variant::LumaKeyParams;
use crate::compositing::domain::sprite_blitter::SpriteBlitter;
use crate::detection::domain::landmark_mapper::Anchor;
use crate::shared::frame::PlanarFrame;

/// Copies sprite pixels whose luma is at or below a threshold.
///
/// Brighter source pixels stand in for transparency and leave the frame
/// untouched. Each chroma pair follows the key of the top-left luma sample
/// of its 2x2 block, so a fully keyed-out sprite changes nothing.
pub struct LumaKeyBlitter {
    params: LumaKeyParams,
}

impl LumaKeyBlitter {
    pub fn new(params: LumaKeyParams) -> Self {
        Self { params }
    }
}

impl Default for LumaKeyBlitter {
    fn default() -> Self {
        Self::new(LumaKeyParams::COPY)
    }
}

impl SpriteBlitter for LumaKeyBlitter {
    fn blit(&self, frame: &mut PlanarFrame<'_>, sprite: &SpriteAsset, anchor: Anchor) {
        let threshold = self.params.threshold;
        let (left, top) = sprite.top_left_at(anchor);

        for i in 0..sprite.width() {
            for j in 0..sprite.height() {
                let Some(value) = sprite.luma_at(i, j) else {
                    continue;
                };
                if value > threshold {
                    continue;
                }
                if let Some(pt) = frame.luma_index(left + i as i64, top + j as i64) {
                    frame.luma_mut()[pt] = value;
                }
            }
        }

        let (chroma_left, chroma_top) = (left.div_euclid(2), top.div_euclid(2));
        let u_slot = self.params.chroma_offset & 1;
        let v_slot = u_slot ^ 1;

        for ci in 0..sprite.width() / 2 {
            for cj in 0..sprite.height() / 2 {
                match sprite.luma_at(ci * 2, cj * 2) {
                    Some(key) if key <= threshold => {}
                    _ => continue,
                }
                let Some((u, v)) = sprite.chroma_at(ci, cj) else {
                    continue;
                };
                let Some(base) = frame.chroma_index(chroma_left + ci as i64, chroma_top + cj as i64)
                else {
                    continue;
                };
                let chroma = frame.chroma_mut();
                chroma[base + u_slot] = u;
                chroma[base + v_slot] = v;
            }
        }
    }
}
