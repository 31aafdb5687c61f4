use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgb, RgbImage, Rgba, RgbaImage};

/// Renders any decoded image down to a single-channel 8-bit version.
///
/// 16-bit inputs are scaled into the 8-bit range (divide by 256) before the
/// luma conversion. Alpha channels are dropped. An 8-bit single-channel
/// image passes through unchanged.
pub fn to_grayscale(image: &DynamicImage) -> GrayImage {
    match image {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        DynamicImage::ImageLuma16(gray) => shrink_luma16(gray),
        DynamicImage::ImageLumaA8(gray) => {
            ImageBuffer::from_fn(gray.width(), gray.height(), |x, y| {
                Luma([gray.get_pixel(x, y)[0]])
            })
        }
        DynamicImage::ImageLumaA16(gray) => {
            ImageBuffer::from_fn(gray.width(), gray.height(), |x, y| {
                Luma([(gray.get_pixel(x, y)[0] >> 8) as u8])
            })
        }
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => image.to_luma8(),
        DynamicImage::ImageRgb16(rgb) => DynamicImage::ImageRgb8(shrink_rgb16(rgb)).to_luma8(),
        DynamicImage::ImageRgba16(rgba) => {
            DynamicImage::ImageRgba8(shrink_rgba16(rgba)).to_luma8()
        }
        // Float and future formats: let the library coerce to 8-bit luma.
        _ => image.to_luma8(),
    }
}

fn shrink_luma16(gray: &ImageBuffer<Luma<u16>, Vec<u16>>) -> GrayImage {
    ImageBuffer::from_fn(gray.width(), gray.height(), |x, y| {
        Luma([(gray.get_pixel(x, y)[0] >> 8) as u8])
    })
}

fn shrink_rgb16(rgb: &ImageBuffer<Rgb<u16>, Vec<u16>>) -> RgbImage {
    ImageBuffer::from_fn(rgb.width(), rgb.height(), |x, y| {
        let p = rgb.get_pixel(x, y);
        Rgb([(p[0] >> 8) as u8, (p[1] >> 8) as u8, (p[2] >> 8) as u8])
    })
}

fn shrink_rgba16(rgba: &ImageBuffer<Rgba<u16>, Vec<u16>>) -> RgbaImage {
    ImageBuffer::from_fn(rgba.width(), rgba.height(), |x, y| {
        let p = rgba.get_pixel(x, y);
        Rgba([
            (p[0] >> 8) as u8,
            (p[1] >> 8) as u8,
            (p[2] >> 8) as u8,
            (p[3] >> 8) as u8,
        ])
    })
}
