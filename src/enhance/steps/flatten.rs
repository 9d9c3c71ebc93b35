use crate::error::ProcessError;
use image::{ColorType, DynamicImage, GrayAlphaImage, GrayImage, Luma, Rgb, RgbImage, RgbaImage};

/// Reduce any decoded image to 8-bit grayscale or RGB.
/// Transparent pixels are composited onto white, so the filters never see alpha.
pub fn apply(image: DynamicImage) -> Result<DynamicImage, ProcessError> {
    let flattened = match image.color() {
        ColorType::L8 | ColorType::Rgb8 => image,
        ColorType::L16 => DynamicImage::ImageLuma8(image.to_luma8()),
        ColorType::Rgb16 | ColorType::Rgb32F => DynamicImage::ImageRgb8(image.to_rgb8()),
        ColorType::La8 | ColorType::La16 => {
            DynamicImage::ImageLuma8(composite_gray(&image.to_luma_alpha8()))
        }
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => {
            DynamicImage::ImageRgb8(composite_rgb(&image.to_rgba8()))
        }
        other => {
            return Err(ProcessError::UnsupportedMode(format!(
                "cannot normalize color type {:?}",
                other
            )))
        }
    };
    Ok(flattened)
}

fn over_white(channel: u8, alpha: u8) -> u8 {
    let (c, a) = (channel as u16, alpha as u16);
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

fn composite_gray(image: &GrayAlphaImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let [l, a] = image.get_pixel(x, y).0;
        Luma([over_white(l, a)])
    })
}

fn composite_rgb(image: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        Rgb([over_white(r, a), over_white(g, a), over_white(b, a)])
    })
}
