pub mod asset_error;
pub mod asset_store;
pub mod sprite_asset;
pub mod sprite_decoder;
pub mod sticker_catalog;
