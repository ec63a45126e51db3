use image::RgbaImage;
use tracing::info;

const CHANNELS: usize = 4;

/// Center `img` on a transparent square canvas whose side is the longer edge.
pub fn pad_to_square(img: &RgbaImage) -> RgbaImage {
    let (cols, rows) = (img.width() as usize, img.height() as usize);
    let max_dim = cols.max(rows);
    if cols == rows {
        return img.clone();
    }
    let pad_cols = (max_dim - cols) / 2;
    let pad_rows = (max_dim - rows) / 2;

    info!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, pad_cols, pad_rows
    );
    info!("Final dimensions: {}x{}", max_dim, max_dim);

    let src = img.as_raw();
    let mut padded = RgbaImage::new(max_dim as u32, max_dim as u32);
    let dst: &mut [u8] = &mut padded;
    let row_bytes = cols * CHANNELS;
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..rows {
        let src_offset = row * row_bytes;
        let dst_offset = ((row + pad_rows) * max_dim + pad_cols) * CHANNELS;
        dst[dst_offset..dst_offset + row_bytes]
            .copy_from_slice(&src[src_offset..src_offset + row_bytes]);
    }

    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    #[test]
    fn wide_image_is_centered_vertically() {
        let img: RgbaImage = ImageBuffer::from_pixel(6, 2, Rgba([9, 9, 9, 255]));
        let out = pad_to_square(&img);
        assert_eq!(out.dimensions(), (6, 6));
        assert_eq!(out.get_pixel(0, 1)[3], 0);
        assert_eq!(out.get_pixel(0, 2), &Rgba([9, 9, 9, 255]));
        assert_eq!(out.get_pixel(5, 3), &Rgba([9, 9, 9, 255]));
        assert_eq!(out.get_pixel(5, 4)[3], 0);
    }

    #[test]
    fn tall_image_is_centered_horizontally() {
        let img: RgbaImage = ImageBuffer::from_pixel(1, 4, Rgba([1, 2, 3, 255]));
        let out = pad_to_square(&img);
        assert_eq!(out.dimensions(), (4, 4));
        // odd padding rounds toward the left
        assert_eq!(out.get_pixel(1, 0), &Rgba([1, 2, 3, 255]));
        assert_eq!(out.get_pixel(0, 0)[3], 0);
        assert_eq!(out.get_pixel(2, 0)[3], 0);
    }

    #[test]
    fn square_image_is_untouched() {
        let img: RgbaImage = ImageBuffer::from_pixel(3, 3, Rgba([1, 1, 1, 1]));
        assert_eq!(pad_to_square(&img), img);
    }
}
