use std::path::Path;

use crate::assets::domain::asset_error::AssetError;
use crate::assets::domain::sprite_asset::SpriteAsset;
use crate::assets::domain::sprite_decoder::SpriteDecoder;
use crate::shared::color::{rgb_to_yuv, Yuv};
use crate::shared::constants::NEUTRAL_CHROMA;

/// Pixels with alpha below this are treated as transparent.
const ALPHA_CUTOFF: u8 = 128;

/// What a transparent pixel turns into: white, neutral chroma. Both
/// keying rules treat it as background.
const KEYED_BACKGROUND: Yuv = Yuv::new(255, NEUTRAL_CHROMA, NEUTRAL_CHROMA);

/// Decodes sticker images with the `image` crate into column-major 4:2:0.
///
/// Odd dimensions are truncated to even so every chroma sample covers a
/// full 2x2 block.
pub struct ImageSpriteDecoder;

impl ImageSpriteDecoder {
    pub fn new() -> Self {
        Self
    }

    pub fn from_rgba(img: &image::RgbaImage) -> Result<SpriteAsset, AssetError> {
        let width = img.width() & !1;
        let height = img.height() & !1;
        SpriteAsset::from_fn(width, height, |x, y| {
            let p = img.get_pixel(x, y);
            if p[3] < ALPHA_CUTOFF {
                KEYED_BACKGROUND
            } else {
                rgb_to_yuv(p[0], p[1], p[2])
            }
        })
    }
}

impl Default for ImageSpriteDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpriteDecoder for ImageSpriteDecoder {
    fn decode(&self, path: &Path) -> Result<SpriteAsset, AssetError> {
        let img = image::open(path)
            .map_err(|source| AssetError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();
        Self::from_rgba(&img)
    }
}
