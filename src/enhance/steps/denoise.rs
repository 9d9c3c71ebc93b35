use super::unsupported;
use crate::error::ProcessError;
use image::DynamicImage;
use imageproc::filter::median_filter;

/// Apply a square median filter of side `window` to every channel.
/// Runs before sharpening so enhancement does not amplify noise.
pub fn apply(image: DynamicImage, window: u32) -> Result<DynamicImage, ProcessError> {
    let radius = window / 2;
    match image {
        DynamicImage::ImageLuma8(gray) => {
            Ok(DynamicImage::ImageLuma8(median_filter(&gray, radius, radius)))
        }
        DynamicImage::ImageRgb8(rgb) => {
            Ok(DynamicImage::ImageRgb8(median_filter(&rgb, radius, radius)))
        }
        other => Err(unsupported("denoise", &other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn test_denoise_removes_isolated_pixels() {
        let mut img = GrayImage::from_pixel(10, 10, Luma([128]));
        img.put_pixel(5, 5, Luma([0]));
        img.put_pixel(2, 7, Luma([255]));

        let result = apply(DynamicImage::ImageLuma8(img), 3).unwrap().to_luma8();

        assert_eq!(result.get_pixel(5, 5).0[0], 128);
        assert_eq!(result.get_pixel(2, 7).0[0], 128);
    }

    #[test]
    fn test_wider_window_removes_small_clusters() {
        // The center of a 3x3 cluster survives a 3x3 median but not a 5x5 one
        let mut img = GrayImage::from_pixel(12, 12, Luma([200]));
        for y in 5..=7 {
            for x in 5..=7 {
                img.put_pixel(x, y, Luma([0]));
            }
        }

        let narrow = apply(DynamicImage::ImageLuma8(img.clone()), 3)
            .unwrap()
            .to_luma8();
        let wide = apply(DynamicImage::ImageLuma8(img), 5).unwrap().to_luma8();

        assert_eq!(narrow.get_pixel(6, 6).0[0], 0);
        assert_eq!(wide.get_pixel(6, 6).0[0], 200);
    }

    #[test]
    fn test_denoise_filters_each_rgb_channel() {
        let mut img = RgbImage::from_pixel(7, 7, Rgb([10, 100, 200]));
        img.put_pixel(3, 3, Rgb([255, 0, 0]));

        let result = apply(DynamicImage::ImageRgb8(img), 3).unwrap().to_rgb8();

        assert_eq!(result.get_pixel(3, 3).0, [10, 100, 200]);
        assert_eq!(result.dimensions(), (7, 7));
    }

    #[test]
    fn test_denoise_rejects_alpha_images() {
        let img = image::RgbaImage::new(2, 2);
        let result = apply(DynamicImage::ImageRgba8(img), 3);
        assert!(matches!(result, Err(ProcessError::UnsupportedMode(_))));
    }
}
