pub mod asset_loader;
pub mod image_sprite_decoder;
