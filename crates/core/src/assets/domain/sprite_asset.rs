use crate::detection::domain::landmark_mapper::Anchor;
use crate::shared::color::Yuv;

use super::asset_error::AssetError;

/// A decoded sticker in 4:2:0 layout, stored column-major.
///
/// Luma sample `(x, y)` lives at `x * height + y`. Chroma sample
/// `(cx, cy)` is the pair at `(cx * height / 2 + cy) * 2` (U) and the
/// byte after it (V). Sprites are decoded once at startup and never
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteAsset {
    luma: Vec<u8>,
    chroma: Vec<u8>,
    width: u32,
    height: u32,
}

impl SpriteAsset {
    pub fn new(luma: Vec<u8>, chroma: Vec<u8>, width: u32, height: u32) -> Result<Self, AssetError> {
        if width < 2 || height < 2 || width % 2 != 0 || height % 2 != 0 {
            return Err(AssetError::TooSmall { width, height });
        }
        let luma_len = width as usize * height as usize;
        if luma.len() != luma_len {
            return Err(AssetError::PlaneLength {
                plane: "luma",
                expected: luma_len,
                actual: luma.len(),
            });
        }
        if chroma.len() != luma_len / 2 {
            return Err(AssetError::PlaneLength {
                plane: "chroma",
                expected: luma_len / 2,
                actual: chroma.len(),
            });
        }
        Ok(Self {
            luma,
            chroma,
            width,
            height,
        })
    }

    /// Builds a sprite by sampling `pixel(x, y)` in image orientation.
    ///
    /// Chroma for each 2x2 block comes from its top-left pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        pixel: impl Fn(u32, u32) -> Yuv,
    ) -> Result<Self, AssetError> {
        if width < 2 || height < 2 || width % 2 != 0 || height % 2 != 0 {
            return Err(AssetError::TooSmall { width, height });
        }
        let mut luma = Vec::with_capacity(width as usize * height as usize);
        for x in 0..width {
            for y in 0..height {
                luma.push(pixel(x, y).y);
            }
        }
        let mut chroma = Vec::with_capacity(luma.len() / 2);
        for cx in 0..width / 2 {
            for cy in 0..height / 2 {
                let sample = pixel(cx * 2, cy * 2);
                chroma.push(sample.u);
                chroma.push(sample.v);
            }
        }
        Self::new(luma, chroma, width, height)
    }

    /// Uniform sprite, handy for fixtures.
    pub fn filled(width: u32, height: u32, color: Yuv) -> Result<Self, AssetError> {
        Self::from_fn(width, height, |_, _| color)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn luma(&self) -> &[u8] {
        &self.luma
    }

    pub fn chroma(&self) -> &[u8] {
        &self.chroma
    }

    pub fn luma_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.luma
            .get(x as usize * self.height as usize + y as usize)
            .copied()
    }

    /// `(U, V)` of chroma sample `(cx, cy)`.
    pub fn chroma_at(&self, cx: u32, cy: u32) -> Option<(u8, u8)> {
        let ch = self.height / 2;
        if cx >= self.width / 2 || cy >= ch {
            return None;
        }
        let base = (cx as usize * ch as usize + cy as usize) * 2;
        Some((*self.chroma.get(base)?, *self.chroma.get(base + 1)?))
    }

    /// Frame position of the sprite's top-left pixel when centered on `anchor`.
    pub fn top_left_at(&self, anchor: Anchor) -> (i64, i64) {
        (
            anchor.x as i64 - (self.width / 2) as i64,
            anchor.y as i64 - (self.height / 2) as i64,
        )
    }
}
