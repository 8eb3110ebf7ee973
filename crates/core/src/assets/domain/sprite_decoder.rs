use std::path::Path;

use super::asset_error::AssetError;
use super::sprite_asset::SpriteAsset;

/// Domain interface for turning a sticker file into a frame-native sprite.
pub trait SpriteDecoder: Send + Sync {
    fn decode(&self, path: &Path) -> Result<SpriteAsset, AssetError>;
}
