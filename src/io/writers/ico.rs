use std::path::Path;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, RgbaImage};

use crate::core::params::MAX_ICO_SIZE;
use crate::error::{Error, Result};

/// Multi-resolution ICO bytes; each frame is stored PNG-compressed.
pub fn encode_ico(frames: &[RgbaImage]) -> Result<Vec<u8>> {
    if frames.is_empty() {
        return Err(Error::Processing("ICO needs at least one frame".to_string()));
    }
    let mut ico_frames = Vec::with_capacity(frames.len());
    for frame in frames {
        let (w, h) = frame.dimensions();
        if w == 0 || h == 0 || w > MAX_ICO_SIZE || h > MAX_ICO_SIZE {
            return Err(Error::InvalidArgument {
                arg: "ico frame size",
                value: format!("{}x{}", w, h),
            });
        }
        ico_frames.push(IcoFrame::as_png(
            frame.as_raw(),
            w,
            h,
            ExtendedColorType::Rgba8,
        )?);
    }

    let mut bytes = Vec::new();
    IcoEncoder::new(&mut bytes).encode_images(&ico_frames)?;
    Ok(bytes)
}

pub fn write_ico(output: &Path, frames: &[RgbaImage]) -> Result<()> {
    let bytes = encode_ico(frames)?;
    std::fs::write(output, bytes)?;
    Ok(())
}
