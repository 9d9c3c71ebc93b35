use super::{blend_into, unsupported};
use crate::error::ProcessError;
use image::{DynamicImage, GrayImage, RgbImage};
use imageproc::filter::filter3x3;

/// 3x3 smoothing kernel (center 5, neighbors 1, normalized by 13)
const SMOOTH_KERNEL: [f32; 9] = [
    1.0 / 13.0,
    1.0 / 13.0,
    1.0 / 13.0,
    1.0 / 13.0,
    5.0 / 13.0,
    1.0 / 13.0,
    1.0 / 13.0,
    1.0 / 13.0,
    1.0 / 13.0,
];

/// Sharpness enhancement: interpolate between a smoothed copy and the image.
/// `factor` 1.0 is the identity, larger values extrapolate past the original.
pub fn apply(image: DynamicImage, factor: f32) -> Result<DynamicImage, ProcessError> {
    match image {
        DynamicImage::ImageLuma8(gray) => {
            let mut smoothed: GrayImage = filter3x3(&gray, &SMOOTH_KERNEL);
            blend_into(&mut smoothed, &gray, factor);
            Ok(DynamicImage::ImageLuma8(smoothed))
        }
        DynamicImage::ImageRgb8(rgb) => {
            let mut smoothed: RgbImage = filter3x3(&rgb, &SMOOTH_KERNEL);
            blend_into(&mut smoothed, &rgb, factor);
            Ok(DynamicImage::ImageRgb8(smoothed))
        }
        other => Err(unsupported("sharpen", &other)),
    }
}
