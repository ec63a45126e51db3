use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::Result;

/// Encode fully in memory first so a failed encode never leaves a partial file.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

pub fn write_png(output: &Path, img: &RgbaImage) -> Result<()> {
    let bytes = encode_png(img)?;
    std::fs::write(output, bytes)?;
    Ok(())
}
