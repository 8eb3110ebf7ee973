use crate::assets::domain::sprite_asset::SpriteAsset;
use crate::compositing::domain::blit_variant::YuvKeyParams;
use crate::compositing::domain::sprite_blitter::SpriteBlitter;
use crate::detection::domain::landmark_mapper::Anchor;
use crate::shared::frame::PlanarFrame;

/// Color-aware copy that keys out bright, near-gray source pixels.
///
/// Every visible pixel writes its luma and rewrites the chroma pair of
/// the 2x2 block it falls in, so a block is colored by its last visible
/// pixel. Running it twice over the same spot is not idempotent: pixels
/// written on the first pass can satisfy the background rule on the
/// second.
pub struct YuvKeyBlitter {
    params: YuvKeyParams,
}

impl YuvKeyBlitter {
    pub fn new(params: YuvKeyParams) -> Self {
        Self { params }
    }
}

impl Default for YuvKeyBlitter {
    fn default() -> Self {
        Self::new(YuvKeyParams::STANDARD)
    }
}

impl SpriteBlitter for YuvKeyBlitter {
    fn blit(&self, frame: &mut PlanarFrame<'_>, sprite: &SpriteAsset, anchor: Anchor) {
        let (left, top) = sprite.top_left_at(anchor);

        for i in 0..sprite.width() {
            for j in 0..sprite.height() {
                let (Some(y), Some((u, v))) = (sprite.luma_at(i, j), sprite.chroma_at(i / 2, j / 2))
                else {
                    continue;
                };
                if self.params.is_background(y, u, v) {
                    continue;
                }

                let (fx, fy) = (left + i as i64, top + j as i64);
                if let Some(pt) = frame.luma_index(fx, fy) {
                    frame.luma_mut()[pt] = y;
                }
                if let Some(base) = frame.chroma_index(fx.div_euclid(2), fy.div_euclid(2)) {
                    let (first, second) = if self.params.swap_chroma { (v, u) } else { (u, v) };
                    let chroma = frame.chroma_mut();
                    chroma[base] = first;
                    chroma[base + 1] = second;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::color::Yuv;
    use crate::shared::frame::Nv12Buffer;

    #[test]
    fn test_colored_pixels_are_written_with_swapped_chroma() {
        let sprite = SpriteAsset::filled(4, 4, Yuv::new(120, 60, 200)).unwrap();
        let mut buffer = Nv12Buffer::filled(8, 8, 16, 128);
        let mut frame = buffer.as_frame().unwrap();
        YuvKeyBlitter::default().blit(&mut frame, &sprite, Anchor::new(4, 4));

        assert_eq!(buffer.luma[2 + 2 * 8], 120);
        assert_eq!(buffer.luma[5 + 5 * 8], 120);
        assert_eq!(buffer.luma[1 + 1 * 8], 16);
        // chroma block (1, 1)
        assert_eq!(buffer.chroma[10], 200);
        assert_eq!(buffer.chroma[11], 60);
    }

    #[test]
    fn test_unswapped_params_keep_source_order() {
        let sprite = SpriteAsset::filled(2, 2, Yuv::new(120, 60, 200)).unwrap();
        let mut buffer = Nv12Buffer::filled(8, 8, 16, 128);
        let mut frame = buffer.as_frame().unwrap();
        let params = YuvKeyParams {
            swap_chroma: false,
            ..YuvKeyParams::STANDARD
        };
        YuvKeyBlitter::new(params).blit(&mut frame, &sprite, Anchor::new(4, 4));

        // 2x2 sprite at (3, 3)..(5, 5) touches chroma blocks (1,1), (2,1), (1,2), (2,2)
        assert_eq!(buffer.chroma[10], 60);
        assert_eq!(buffer.chroma[11], 200);
    }

    #[test]
    fn test_near_white_gray_background_is_skipped() {
        let sprite = SpriteAsset::filled(4, 4, Yuv::new(250, 127, 130)).unwrap();
        let mut buffer = Nv12Buffer::filled(8, 8, 16, 100);
        let original = buffer.clone();
        let mut frame = buffer.as_frame().unwrap();
        YuvKeyBlitter::default().blit(&mut frame, &sprite, Anchor::new(4, 4));
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_bright_but_tinted_pixels_are_kept() {
        // a bright yellow is not background even though luma > 230
        let sprite = SpriteAsset::filled(2, 2, Yuv::new(240, 40, 140)).unwrap();
        let mut buffer = Nv12Buffer::filled(8, 8, 16, 128);
        let mut frame = buffer.as_frame().unwrap();
        YuvKeyBlitter::default().blit(&mut frame, &sprite, Anchor::new(4, 4));
        assert_eq!(buffer.luma[3 + 3 * 8], 240);
    }

    #[test]
    fn test_off_frame_anchor_never_panics() {
        let sprite = SpriteAsset::filled(6, 6, Yuv::new(10, 60, 200)).unwrap();
        let mut buffer = Nv12Buffer::filled(8, 8, 16, 128);
        let mut frame = buffer.as_frame().unwrap();
        for &(x, y) in &[(-3, -3), (0, 0), (7, 7), (10, 3), (-50, 90)] {
            YuvKeyBlitter::default().blit(&mut frame, &sprite, Anchor::new(x, y));
        }
        assert_eq!(buffer.luma.len(), 64);
        assert_eq!(buffer.chroma.len(), 32);
    }
}
