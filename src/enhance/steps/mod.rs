//! Individual enhancement steps
//!
//! Every step after `flatten` expects an 8-bit grayscale or RGB image.

pub mod contrast;
pub mod denoise;
pub mod edge;
pub mod flatten;
pub mod sharpen;

use crate::error::ProcessError;
use image::{DynamicImage, ImageBuffer, Pixel};

/// Interpolate between a degenerate value and the original one.
/// A factor of 1.0 returns `value` unchanged.
pub(crate) fn blend_value(degenerate: u8, value: u8, factor: f32) -> u8 {
    let base = degenerate as f32;
    (base + factor * (value as f32 - base)).clamp(0.0, 255.0) as u8
}

/// Blend `image` into `degenerate`, overwriting the degenerate buffer
pub(crate) fn blend_into<P>(
    degenerate: &mut ImageBuffer<P, Vec<u8>>,
    image: &ImageBuffer<P, Vec<u8>>,
    factor: f32,
) where
    P: Pixel<Subpixel = u8>,
{
    for (base, &value) in degenerate.iter_mut().zip(image.iter()) {
        *base = blend_value(*base, value, factor);
    }
}

pub(crate) fn unsupported(step: &str, image: &DynamicImage) -> ProcessError {
    ProcessError::UnsupportedMode(format!(
        "{} expects 8-bit grayscale or RGB, got {:?}",
        step,
        image.color()
    ))
}
