use clap::Parser;
use std::path::PathBuf;

use crate::config::{
    DEFAULT_CONTRAST, DEFAULT_DENOISE, DEFAULT_MERGE_KERNEL, DEFAULT_MIN_BOX_HEIGHT,
    DEFAULT_MIN_BOX_SIDE, DEFAULT_OPEN_KERNEL, DEFAULT_SHARPEN, DEFAULT_UPSCALE_FACTOR,
    MAX_UPSCALE_FACTOR,
};

#[derive(Parser, Debug)]
#[command(name = "image-enhance")]
#[command(about = "Enhance upscaled or distorted images in a folder")]
#[command(version)]
pub struct EnhanceArgs {
    /// Input folder containing images
    #[arg(long, env = "ENHANCE_INPUT")]
    pub input: PathBuf,

    /// Output folder (created if missing)
    #[arg(long, env = "ENHANCE_OUTPUT")]
    pub output: PathBuf,

    /// Sharpen strength (suggested 1.2-2.0, 1.0 leaves the image unchanged)
    #[arg(long, default_value_t = DEFAULT_SHARPEN, allow_negative_numbers = true)]
    pub sharpen: f32,

    /// Contrast strength (suggested 1.1-1.5, 1.0 leaves the image unchanged)
    #[arg(long, default_value_t = DEFAULT_CONTRAST, allow_negative_numbers = true)]
    pub contrast: f32,

    /// Denoise strength (1-3, higher uses a larger median window)
    #[arg(
        long,
        default_value_t = DEFAULT_DENOISE,
        value_parser = clap::value_parser!(u8).range(1..=3)
    )]
    pub denoise: u8,

    /// Print the batch report as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Parser, Debug)]
#[command(name = "char-segment")]
#[command(about = "Split a scanned document image into one image per character")]
#[command(version)]
pub struct SegmentArgs {
    /// Input image path
    #[arg(long)]
    pub input: PathBuf,

    /// Output directory for char_N.png files
    #[arg(long, default_value = "output_chars")]
    pub output: PathBuf,

    /// Side of the square element used to remove speckle noise
    #[arg(long, default_value_t = DEFAULT_OPEN_KERNEL)]
    pub open_kernel: u32,

    /// Side of the square element used to merge strokes of one character
    #[arg(long, default_value_t = DEFAULT_MERGE_KERNEL)]
    pub merge_kernel: u32,

    /// Minimum width and height of a kept region
    #[arg(long, default_value_t = DEFAULT_MIN_BOX_SIDE)]
    pub min_side: u32,

    /// Minimum height of a kept region
    #[arg(long, default_value_t = DEFAULT_MIN_BOX_HEIGHT)]
    pub min_height: u32,

    /// Upscale factor applied to each saved character (1-16)
    #[arg(
        long,
        default_value_t = DEFAULT_UPSCALE_FACTOR,
        value_parser = clap::value_parser!(u32).range(1..=MAX_UPSCALE_FACTOR as i64)
    )]
    pub scale: u32,

    /// Print the segmentation report as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}
