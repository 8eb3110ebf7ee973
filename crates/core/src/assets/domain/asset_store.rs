use std::path::Path;

use super::asset_error::AssetError;
use super::sprite_asset::SpriteAsset;
use super::sprite_decoder::SpriteDecoder;

/// Decodes asset `id` from `files`, resolved against `dir`.
pub fn load_asset(
    dir: &Path,
    files: &[&str],
    id: usize,
    decoder: &dyn SpriteDecoder,
) -> Result<SpriteAsset, AssetError> {
    let name = files.get(id).ok_or(AssetError::UnknownAsset(id))?;
    decoder.decode(&dir.join(name))
}

/// Sprites decoded once at startup, indexed by asset id.
///
/// A slot whose file failed to decode stays empty; compositing requests
/// for it are skipped.
#[derive(Clone, Debug, Default)]
pub struct AssetStore {
    assets: Vec<Option<SpriteAsset>>,
}

impl AssetStore {
    pub fn from_assets(assets: Vec<Option<SpriteAsset>>) -> Self {
        Self { assets }
    }

    pub fn load(dir: &Path, files: &[&str], decoder: &dyn SpriteDecoder) -> Self {
        let assets: Vec<Option<SpriteAsset>> = (0..files.len())
            .map(|id| match load_asset(dir, files, id, decoder) {
                Ok(sprite) => {
                    log::debug!(
                        "Decoded sticker {} ({}x{})",
                        files[id],
                        sprite.width(),
                        sprite.height()
                    );
                    Some(sprite)
                }
                Err(e) => {
                    log::warn!("Sticker {} unavailable: {e}", files[id]);
                    None
                }
            })
            .collect();

        let store = Self { assets };
        log::info!(
            "Loaded {}/{} sticker assets from {}",
            store.available(),
            store.len(),
            dir.display()
        );
        store
    }

    pub fn get(&self, id: usize) -> Option<&SpriteAsset> {
        self.assets.get(id).and_then(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Number of slots that decoded successfully.
    pub fn available(&self) -> usize {
        self.assets.iter().filter(|a| a.is_some()).count()
    }
}
