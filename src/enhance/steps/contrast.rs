use super::{blend_value, unsupported};
use crate::error::ProcessError;
use crate::luma;
use image::DynamicImage;

/// Contrast enhancement: push every channel away from the mean luminance.
/// `factor` 1.0 is the identity.
pub fn apply(image: DynamicImage, factor: f32) -> Result<DynamicImage, ProcessError> {
    let mean = mean_luma(&image);
    match image {
        DynamicImage::ImageLuma8(mut gray) => {
            for value in gray.iter_mut() {
                *value = blend_value(mean, *value, factor);
            }
            Ok(DynamicImage::ImageLuma8(gray))
        }
        DynamicImage::ImageRgb8(mut rgb) => {
            for value in rgb.iter_mut() {
                *value = blend_value(mean, *value, factor);
            }
            Ok(DynamicImage::ImageRgb8(rgb))
        }
        other => Err(unsupported("contrast", &other)),
    }
}

/// Rounded mean of the BT.601 grayscale rendition
fn mean_luma(image: &DynamicImage) -> u8 {
    let gray = match image {
        DynamicImage::ImageRgb8(rgb) => luma::to_gray(rgb),
        other => other.to_luma8(),
    };
    let count = gray.width() as u64 * gray.height() as u64;
    if count == 0 {
        return 0;
    }
    let sum: u64 = gray.iter().map(|&v| v as u64).sum();
    (sum as f64 / count as f64 + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    fn ramp() -> GrayImage {
        GrayImage::from_fn(10, 10, |x, _| Luma([80 + (x as u8) * 10]))
    }

    #[test]
    fn test_contrast_identity_at_factor_one() {
        let img = ramp();
        let result = apply(DynamicImage::ImageLuma8(img.clone()), 1.0)
            .unwrap()
            .to_luma8();
        assert_eq!(result, img);

        let rgb = RgbImage::from_fn(6, 6, |x, y| Rgb([x as u8 * 40, y as u8 * 40, 128]));
        let result = apply(DynamicImage::ImageRgb8(rgb.clone()), 1.0)
            .unwrap()
            .to_rgb8();
        assert_eq!(result, rgb);
    }

    #[test]
    fn test_contrast_widens_range() {
        let img = ramp();
        let result = apply(DynamicImage::ImageLuma8(img), 1.5).unwrap().to_luma8();

        let min = result.iter().copied().min().unwrap();
        let max = result.iter().copied().max().unwrap();

        assert!(min < 80, "darkest pixel should get darker, got {}", min);
        assert!(max > 170, "brightest pixel should get brighter, got {}", max);
    }

    #[test]
    fn test_contrast_zero_flattens_to_mean() {
        let img = ramp();
        let result = apply(DynamicImage::ImageLuma8(img), 0.0).unwrap().to_luma8();
        // Mean of 80..=170 in steps of 10 is 125
        assert!(result.pixels().all(|p| p.0[0] == 125));
    }

    #[test]
    fn test_negative_factor_inverts_around_mean() {
        let img = ramp();
        let result = apply(DynamicImage::ImageLuma8(img), -1.0).unwrap().to_luma8();
        // Mean is 125, so 80 maps to 170 and 170 maps to 80
        assert_eq!(result.get_pixel(0, 0).0[0], 170);
        assert_eq!(result.get_pixel(9, 0).0[0], 80);
    }

    #[test]
    fn test_mean_luma_uses_bt601_weights() {
        let rgb = RgbImage::from_pixel(4, 4, Rgb([0, 255, 0]));
        assert_eq!(mean_luma(&DynamicImage::ImageRgb8(rgb)), 150);
    }

    #[test]
    fn test_mean_luma_rounds() {
        let mut img = GrayImage::from_pixel(2, 1, Luma([10]));
        img.put_pixel(1, 0, Luma([11]));
        assert_eq!(mean_luma(&DynamicImage::ImageLuma8(img)), 11);
    }
}
