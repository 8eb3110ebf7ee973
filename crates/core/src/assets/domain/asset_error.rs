use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("no sticker asset with id {0}")]
    UnknownAsset(usize),
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("sprite must be at least 2x2 after even truncation, got {width}x{height}")]
    TooSmall { width: u32, height: u32 },
    #[error("{plane} plane has {actual} bytes, expected {expected}")]
    PlaneLength {
        plane: &'static str,
        expected: usize,
        actual: usize,
    },
}
