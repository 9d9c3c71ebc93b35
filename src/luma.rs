//! BT.601 luma, the weighting scanned documents are usually graded with.

use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::map::map_colors;

// 0.299, 0.587 and 0.114 in 16-bit fixed point
const RED_WEIGHT: u32 = 19595;
const GREEN_WEIGHT: u32 = 38470;
const BLUE_WEIGHT: u32 = 7471;

/// Rounded `0.299 R + 0.587 G + 0.114 B`
pub fn bt601(pixel: Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    let weighted = r as u32 * RED_WEIGHT + g as u32 * GREEN_WEIGHT + b as u32 * BLUE_WEIGHT;
    ((weighted + (1 << 15)) >> 16) as u8
}

/// Grayscale copy of an RGB raster using BT.601 weights
pub fn to_gray(image: &RgbImage) -> GrayImage {
    map_colors(image, |pixel| Luma([bt601(pixel)]))
}
