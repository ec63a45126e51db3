use crate::error::{Error, Result};
use crate::types::ResizeFilter;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::info;

fn resize_alg(filter: ResizeFilter) -> ResizeAlg {
    match filter {
        ResizeFilter::Nearest => ResizeAlg::Nearest,
        ResizeFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResizeFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResizeFilter::Mitchell => ResizeAlg::Convolution(FilterType::Mitchell),
        ResizeFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
    }
}

/// Resize an RGBA image. Alpha is premultiplied during convolution so
/// transparent pixels do not bleed their color into the edges.
pub fn resize_rgba(
    img: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: ResizeFilter,
) -> Result<RgbaImage> {
    if target_width == 0 || target_height == 0 {
        return Err(Error::ZeroSize {
            width: target_width,
            height: target_height,
        });
    }
    let (original_width, original_height) = img.dimensions();
    if original_width == 0 || original_height == 0 {
        return Err(Error::ZeroSize {
            width: original_width,
            height: original_height,
        });
    }

    info!(
        "Resizing {}x{} -> {}x{} ({})",
        original_width, original_height, target_width, target_height, filter
    );

    let resize_options = ResizeOptions::new().resize_alg(resize_alg(filter));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_width,
        original_height,
        img.as_raw().clone(),
        PixelType::U8x4,
    )?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec()).ok_or_else(|| {
        Error::Processing(format!(
            "resized buffer does not fit {}x{} RGBA",
            target_width, target_height
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    #[test]
    fn downscale_keeps_solid_color() {
        let img: RgbaImage = ImageBuffer::from_pixel(32, 32, Rgba([200, 100, 50, 255]));
        let out = resize_rgba(&img, 8, 8, ResizeFilter::Lanczos3).unwrap();
        assert_eq!(out.dimensions(), (8, 8));
        for px in out.pixels() {
            assert!(px[0].abs_diff(200) <= 1);
            assert!(px[1].abs_diff(100) <= 1);
            assert!(px[2].abs_diff(50) <= 1);
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn upscale_works_for_every_filter() {
        let img: RgbaImage = ImageBuffer::from_pixel(3, 5, Rgba([0, 0, 0, 255]));
        for filter in [
            ResizeFilter::Nearest,
            ResizeFilter::Bilinear,
            ResizeFilter::CatmullRom,
            ResizeFilter::Mitchell,
            ResizeFilter::Lanczos3,
        ] {
            let out = resize_rgba(&img, 64, 64, filter).unwrap();
            assert_eq!(out.dimensions(), (64, 64));
        }
    }

    #[test]
    fn transparent_stays_transparent() {
        let img: RgbaImage = ImageBuffer::from_pixel(10, 10, Rgba([255, 0, 0, 0]));
        let out = resize_rgba(&img, 4, 4, ResizeFilter::Lanczos3).unwrap();
        assert!(out.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn zero_target_is_rejected() {
        let img: RgbaImage = ImageBuffer::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        assert!(matches!(
            resize_rgba(&img, 0, 16, ResizeFilter::Nearest),
            Err(Error::ZeroSize { width: 0, height: 16 })
        ));
    }
}
