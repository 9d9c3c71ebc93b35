use super::contours::BoundingBox;
use crate::error::ProcessError;
use crate::luma;
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, RgbImage};
use imageproc::map::map_colors;
use imageproc::stats::cumulative_histogram;

/// Crop `bbox` from the original color raster, equalize its grayscale
/// histogram and upscale it by `scale` with cubic interpolation
pub fn extract(
    original: &RgbImage,
    bbox: &BoundingBox,
    scale: u32,
) -> Result<GrayImage, ProcessError> {
    let (width, height) = bbox
        .width
        .checked_mul(scale)
        .zip(bbox.height.checked_mul(scale))
        .ok_or_else(|| {
            ProcessError::InvalidParameter(format!(
                "{}x{} region scaled by {} does not fit in an image",
                bbox.width, bbox.height, scale
            ))
        })?;

    let crop = imageops::crop_imm(original, bbox.x, bbox.y, bbox.width, bbox.height).to_image();
    let equalized = equalize(&luma::to_gray(&crop));
    Ok(imageops::resize(&equalized, width, height, FilterType::CatmullRom))
}

/// Histogram equalization stretched so the darkest present level maps to 0
/// and the brightest to 255. A single-intensity image is returned unchanged.
pub fn equalize(gray: &GrayImage) -> GrayImage {
    let cdf = cumulative_histogram(gray).channels[0];
    let total = gray.width() as u64 * gray.height() as u64;

    let Some(cdf_min) = cdf.iter().copied().find(|&count| count > 0) else {
        return gray.clone();
    };
    let cdf_min = cdf_min as u64;
    if cdf_min == total {
        return gray.clone();
    }

    let span = (total - cdf_min) as f64;
    let mut lut = [0u8; 256];
    for (level, &count) in cdf.iter().enumerate() {
        let above = (count as u64).saturating_sub(cdf_min) as f64;
        lut[level] = (above * 255.0 / span).round().clamp(0.0, 255.0) as u8;
    }

    map_colors(gray, |pixel| Luma([lut[pixel.0[0] as usize]]))
}
