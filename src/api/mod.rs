//! High-level, ergonomic library API: turn a logo file into a favicon on disk
//! or in memory. Prefer these entrypoints over the low-level processing modules
//! when integrating favicrop.
use std::path::Path;

use image::RgbaImage;

use crate::core::params::FaviconParams;
use crate::core::processing::pipeline::build_favicon;
use crate::core::processing::save::save_favicon;
use crate::error::Result;
use crate::io::load_rgba;
use crate::io::writers::report::FaviconReport;

/// Load `input`, isolate the icon, resize it and write it to `output`.
pub fn create_favicon(input: &Path, output: &Path, params: &FaviconParams) -> Result<FaviconReport> {
    let source = load_rgba(input)?;
    let favicon = build_favicon(&source, params)?;
    let (format, sizes) = save_favicon(&favicon, output, params)?;

    Ok(FaviconReport::new(
        input,
        output,
        format,
        &favicon,
        params.strategy,
        params.filter,
        sizes,
    ))
}

/// Same as [`create_favicon`] but returns the `size x size` RGBA image (no disk output)
pub fn create_favicon_to_buffer(input: &Path, params: &FaviconParams) -> Result<RgbaImage> {
    let source = load_rgba(input)?;
    Ok(build_favicon(&source, params)?.image)
}
