use super::unsupported;
use crate::error::ProcessError;
use image::{DynamicImage, GrayImage, RgbImage};
use imageproc::filter::filter3x3;

/// The kernel response is divided by this before clamping
const KERNEL_SCALE: f32 = 3.0;

/// Edge emphasis kernel: center `9 + (sharpen - 1)`, neighbors -1, scaled by 1/3
pub fn kernel(sharpen: f32) -> [f32; 9] {
    let n = -1.0 / KERNEL_SCALE;
    let c = (9.0 + (sharpen - 1.0)) / KERNEL_SCALE;
    [n, n, n, n, c, n, n, n, n]
}

/// Second, stronger sharpening pass layered over the sharpness blend
pub fn apply(image: DynamicImage, sharpen: f32) -> Result<DynamicImage, ProcessError> {
    let kernel = kernel(sharpen);
    match image {
        DynamicImage::ImageLuma8(gray) => {
            let filtered: GrayImage = filter3x3(&gray, &kernel);
            Ok(DynamicImage::ImageLuma8(filtered))
        }
        DynamicImage::ImageRgb8(rgb) => {
            let filtered: RgbImage = filter3x3(&rgb, &kernel);
            Ok(DynamicImage::ImageRgb8(filtered))
        }
        other => Err(unsupported("edge emphasis", &other)),
    }
}
