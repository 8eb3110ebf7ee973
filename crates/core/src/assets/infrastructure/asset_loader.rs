use std::path::PathBuf;
use std::thread;

use crossbeam_channel::Receiver;

use crate::assets::domain::asset_store::AssetStore;
use crate::assets::domain::sprite_decoder::SpriteDecoder;
use crate::assets::domain::sticker_catalog::ASSET_FILES;

/// Decodes the sticker library on a worker thread.
///
/// The store arrives on the returned channel once every file has been
/// tried; the caller polls it with `try_recv` between frames instead of
/// blocking startup.
pub fn spawn_asset_load(dir: PathBuf, decoder: Box<dyn SpriteDecoder>) -> Receiver<AssetStore> {
    let (tx, rx) = crossbeam_channel::bounded(1);
    thread::spawn(move || {
        let store = AssetStore::load(&dir, ASSET_FILES, decoder.as_ref());
        if tx.send(store).is_err() {
            log::debug!("Asset store receiver dropped before load finished");
        }
    });
    rx
}
