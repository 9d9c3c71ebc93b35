use image::{GrayImage, Luma};
use imageproc::contrast::{otsu_level, threshold, ThresholdType};

/// Binarize with Otsu's global level, inverted so dark ink becomes
/// foreground (255) and paper becomes background (0).
/// Returns the mask together with the chosen level.
///
/// A single-intensity image gets level 0: a black page is all foreground
/// and any other uniform page is all background.
pub fn apply(gray: &GrayImage) -> (GrayImage, u8) {
    let mut values = gray.iter();
    if let Some(&first) = values.next() {
        if values.all(|&v| v == first) {
            let fill = if first == 0 { 255 } else { 0 };
            return (GrayImage::from_pixel(gray.width(), gray.height(), Luma([fill])), 0);
        }
    }

    let level = otsu_level(gray);
    (threshold(gray, level, ThresholdType::BinaryInverted), level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_binarizes_image() {
        let img = GrayImage::from_fn(50, 50, |x, _| Luma([(x as u8 * 5).min(255)]));

        let (mask, _) = apply(&img);

        for pixel in mask.pixels() {
            assert!(
                pixel.0[0] == 0 || pixel.0[0] == 255,
                "Expected binary pixel, got {}",
                pixel.0[0]
            );
        }
    }

    #[test]
    fn test_threshold_marks_ink_as_foreground() {
        let mut img = GrayImage::from_pixel(50, 20, Luma([240]));
        for x in 10..40 {
            for y in 8..12 {
                img.put_pixel(x, y, Luma([20]));
            }
        }

        let (mask, level) = apply(&img);

        assert!((20..240).contains(&level));
        assert_eq!(mask.get_pixel(25, 10).0[0], 255);
        assert_eq!(mask.get_pixel(25, 2).0[0], 0);
    }

    #[test]
    fn test_blank_page_has_no_foreground() {
        let img = GrayImage::from_pixel(30, 30, Luma([255]));
        let (mask, level) = apply(&img);
        assert!(mask.pixels().all(|p| p.0[0] == 0));
        assert_eq!(level, 0);
    }

    #[test]
    fn test_black_page_is_all_foreground() {
        let img = GrayImage::from_pixel(30, 20, Luma([0]));
        let (mask, level) = apply(&img);
        assert!(mask.pixels().all(|p| p.0[0] == 255));
        assert_eq!(level, 0);
    }
}
