use image::RgbaImage;
use tracing::{debug, info};

use crate::core::params::FaviconParams;
use crate::core::processing::crop::{crop_region, crop_to_content, icon_region};
use crate::core::processing::padding::pad_to_square;
use crate::core::processing::resize::resize_rgba;
use crate::error::Result;
use crate::types::{BoundingBox, CropRegion, ResizeFilter};

/// Output of the crop/isolate/resize chain plus the geometry that produced it.
#[derive(Debug, Clone)]
pub struct Favicon {
    /// Dimensions of the decoded source image
    pub source_size: (u32, u32),
    /// Content bounds in source coordinates; `None` when the source was fully transparent
    pub content_bbox: Option<BoundingBox>,
    /// Icon rectangle in content-cropped coordinates
    pub icon_region: CropRegion,
    pub padded: bool,
    /// Isolated icon before resizing
    pub icon: RgbaImage,
    /// Icon resized to `size x size`
    pub image: RgbaImage,
}

pub fn build_favicon(source: &RgbaImage, params: &FaviconParams) -> Result<Favicon> {
    params.validate()?;

    let source_size = source.dimensions();
    info!("Original size: {}x{}", source_size.0, source_size.1);

    let (content, content_bbox) = crop_to_content(source, params.alpha_threshold);

    let region = icon_region(&content, params);
    debug!("Icon region ({}): {:?}", params.strategy, region);
    let mut icon = crop_region(&content, region);

    let padded = params.pad && !region.is_square();
    if padded {
        icon = pad_to_square(&icon);
    }

    let image = resize_rgba(&icon, params.size, params.size, params.filter)?;

    Ok(Favicon {
        source_size,
        content_bbox,
        icon_region: region,
        padded,
        icon,
        image,
    })
}

/// Render the icon at several square sizes, e.g. for a multi-resolution ICO.
pub fn render_sizes(icon: &RgbaImage, sizes: &[u32], filter: ResizeFilter) -> Result<Vec<RgbaImage>> {
    sizes
        .iter()
        .map(|&size| resize_rgba(icon, size, size, filter))
        .collect()
}
