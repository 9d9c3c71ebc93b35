use crate::config::KernelSize;
use image::{GrayImage, Luma};
use imageproc::morphology::{grayscale_dilate, grayscale_open, Mask};

/// Full rectangular structuring element anchored at (width / 2, height / 2).
/// Sides are capped at 511 by `SegmentParams::validate`.
pub fn rect_mask(size: KernelSize) -> Mask {
    let element = GrayImage::from_pixel(size.width, size.height, Luma([255]));
    Mask::from_image(&element, (size.width / 2) as _, (size.height / 2) as _)
}

/// Opening (erosion then dilation) removes specks smaller than the element
pub fn open(mask: &GrayImage, size: KernelSize) -> GrayImage {
    grayscale_open(mask, &rect_mask(size))
}

/// Dilation grows each component so strokes of one character merge
pub fn dilate(mask: &GrayImage, size: KernelSize) -> GrayImage {
    grayscale_dilate(mask, &rect_mask(size))
}
