use std::path::Path;

use image::{Rgb, RgbImage};

use selfcam_core::shared::color::{yuv_to_rgb, Yuv};
use selfcam_core::shared::frame::Nv12Buffer;

/// Converts an NV12 frame to RGB for viewing.
pub fn to_rgb(buffer: &Nv12Buffer) -> RgbImage {
    let (w, h) = (buffer.width(), buffer.height());
    RgbImage::from_fn(w, h, |x, y| {
        let luma = buffer.luma[(y * w + x) as usize];
        let base = ((y / 2) * (w / 2) + x / 2) as usize * 2;
        Rgb(yuv_to_rgb(Yuv::new(luma, buffer.chroma[base], buffer.chroma[base + 1])))
    })
}

pub fn save_png(buffer: &Nv12Buffer, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    to_rgb(buffer).save(path)?;
    Ok(())
}
