use image::RgbaImage;
use image::imageops;
use tracing::{debug, info, warn};

use crate::core::params::FaviconParams;
use crate::core::processing::bbox::{column_occupancy, content_bbox};
use crate::types::{BoundingBox, CropRegion, IconStrategy};

pub fn crop_region(img: &RgbaImage, region: CropRegion) -> RgbaImage {
    imageops::crop_imm(img, region.x, region.y, region.width, region.height).to_image()
}

/// Crop to the content bounding box. A fully transparent image is returned unchanged.
pub fn crop_to_content(img: &RgbaImage, alpha_threshold: u8) -> (RgbaImage, Option<BoundingBox>) {
    match content_bbox(img, alpha_threshold) {
        Some(bbox) if !bbox.is_empty() => {
            info!("Content bbox: {}", bbox);
            (crop_region(img, bbox.to_region()), Some(bbox))
        }
        _ => {
            warn!("Image has no visible content; skipping content crop");
            (img.clone(), None)
        }
    }
}

/// Left-edge square of side `height` for landscape content; otherwise the whole image.
pub fn left_square_region(width: u32, height: u32) -> CropRegion {
    if width > height {
        info!("Cropping square from left: {}x{}", height, height);
        CropRegion {
            x: 0,
            y: 0,
            width: height,
            height,
        }
    } else {
        CropRegion::full(width, height)
    }
}

/// Start column of the first run of at least `min_run` empty columns that is
/// followed by more content. Leading and trailing empty columns never count.
pub fn find_column_gap(occupied: &[bool], min_run: u32) -> Option<(usize, usize)> {
    let first = occupied.iter().position(|&o| o)?;
    let mut run_start: Option<usize> = None;
    for (x, &o) in occupied.iter().enumerate().skip(first) {
        match (o, run_start) {
            (false, None) => run_start = Some(x),
            (true, Some(start)) => {
                if (x - start) as u32 >= min_run {
                    return Some((first, start));
                }
                run_start = None;
            }
            _ => {}
        }
    }
    None
}

fn gap_region(img: &RgbaImage, params: &FaviconParams) -> Option<CropRegion> {
    let occupied = column_occupancy(img, params.alpha_threshold);
    let (start, end) = find_column_gap(&occupied, params.gap_columns)?;
    debug!("Column gap found at x={} (icon starts at x={})", end, start);

    let columns = CropRegion {
        x: start as u32,
        y: 0,
        width: (end - start) as u32,
        height: img.height(),
    };
    let icon = crop_region(img, columns);
    let bbox = content_bbox(&icon, params.alpha_threshold)?;
    Some(CropRegion {
        x: columns.x,
        y: bbox.top,
        width: columns.width,
        height: bbox.height(),
    })
}

/// Region of `img` (already cropped to content) that holds the icon mark.
pub fn icon_region(img: &RgbaImage, params: &FaviconParams) -> CropRegion {
    let (width, height) = img.dimensions();
    match params.strategy {
        IconStrategy::LeftSquare => left_square_region(width, height),
        IconStrategy::Gap => match gap_region(img, params) {
            Some(region) => {
                info!(
                    "Icon isolated by column gap: {}x{} at ({}, {})",
                    region.width, region.height, region.x, region.y
                );
                region
            }
            None => {
                debug!("No column gap found; falling back to left square");
                left_square_region(width, height)
            }
        },
        IconStrategy::Whole => CropRegion::full(width, height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    const INK: Rgba<u8> = Rgba([20, 60, 160, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    /// 10px tall logo: 6px-wide icon (rows 2..8), 3 empty columns, 20px wordmark.
    fn logo() -> RgbaImage {
        ImageBuffer::from_fn(29, 10, |x, y| {
            let icon = x < 6 && (2..8).contains(&y);
            let text = x >= 9;
            if icon || text { INK } else { CLEAR }
        })
    }

    #[test]
    fn left_square_on_landscape() {
        assert_eq!(
            left_square_region(40, 10),
            CropRegion {
                x: 0,
                y: 0,
                width: 10,
                height: 10
            }
        );
    }

    #[test]
    fn left_square_keeps_portrait_and_square() {
        assert_eq!(left_square_region(10, 10), CropRegion::full(10, 10));
        assert_eq!(left_square_region(8, 12), CropRegion::full(8, 12));
    }

    #[test]
    fn crop_to_content_trims_margins() {
        let img: RgbaImage = ImageBuffer::from_fn(12, 12, |x, y| {
            if (2..7).contains(&x) && (4..9).contains(&y) { INK } else { CLEAR }
        });
        let (cropped, bbox) = crop_to_content(&img, 0);
        assert_eq!(cropped.dimensions(), (5, 5));
        assert_eq!(bbox.unwrap().left, 2);
    }

    #[test]
    fn crop_to_content_passes_through_empty() {
        let img: RgbaImage = ImageBuffer::from_pixel(7, 3, CLEAR);
        let (out, bbox) = crop_to_content(&img, 0);
        assert!(bbox.is_none());
        assert_eq!(out.dimensions(), (7, 3));
    }

    #[test]
    fn gap_finder_needs_content_after_run() {
        let occ = [true, true, false, false, true];
        assert_eq!(find_column_gap(&occ, 2), Some((0, 2)));
        assert_eq!(find_column_gap(&occ, 3), None);
        // trailing emptiness is not a separator
        assert_eq!(find_column_gap(&[true, false, false, false], 1), None);
        assert_eq!(find_column_gap(&[false, false], 1), None);
    }

    #[test]
    fn gap_strategy_isolates_icon() {
        let params = FaviconParams {
            strategy: IconStrategy::Gap,
            ..Default::default()
        };
        let region = icon_region(&logo(), &params);
        assert_eq!(
            region,
            CropRegion {
                x: 0,
                y: 2,
                width: 6,
                height: 6
            }
        );
    }

    #[test]
    fn gap_strategy_falls_back_without_gap() {
        let params = FaviconParams {
            strategy: IconStrategy::Gap,
            gap_columns: 5,
            ..Default::default()
        };
        let region = icon_region(&logo(), &params);
        assert_eq!(region, left_square_region(29, 10));
    }

    #[test]
    fn whole_strategy_keeps_everything() {
        let params = FaviconParams {
            strategy: IconStrategy::Whole,
            ..Default::default()
        };
        assert_eq!(icon_region(&logo(), &params), CropRegion::full(29, 10));
    }
}
