use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::error::Result;

/// Decode an image file (format guessed from its contents) into RGBA8.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    debug!("Decoded {:?} as {:?}", path, img.color());
    Ok(img.to_rgba8())
}
