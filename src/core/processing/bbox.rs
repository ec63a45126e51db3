use image::RgbaImage;

use crate::types::BoundingBox;

#[inline]
fn is_content(alpha: u8, alpha_threshold: u8) -> bool {
    alpha > alpha_threshold
}

/// Bounding box of all pixels whose alpha exceeds `alpha_threshold`.
/// Returns `None` for a fully transparent image.
pub fn content_bbox(img: &RgbaImage, alpha_threshold: u8) -> Option<BoundingBox> {
    let (width, height) = img.dimensions();
    let mut left = width;
    let mut top = height;
    let mut right = 0u32;
    let mut bottom = 0u32;

    for (x, y, px) in img.enumerate_pixels() {
        if is_content(px[3], alpha_threshold) {
            left = left.min(x);
            top = top.min(y);
            right = right.max(x + 1);
            bottom = bottom.max(y + 1);
        }
    }

    if right == 0 {
        return None;
    }
    Some(BoundingBox {
        left,
        top,
        right,
        bottom,
    })
}

/// Per-column flag: true when the column holds at least one content pixel.
pub fn column_occupancy(img: &RgbaImage, alpha_threshold: u8) -> Vec<bool> {
    let (width, _) = img.dimensions();
    let mut occupied = vec![false; width as usize];
    for (x, _, px) in img.enumerate_pixels() {
        if is_content(px[3], alpha_threshold) {
            occupied[x as usize] = true;
        }
    }
    occupied
}
