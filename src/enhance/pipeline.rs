use crate::config::EnhanceParams;
use crate::error::ProcessError;
use crate::timing::{run_step, StepTiming};
use image::{DynamicImage, ImageFormat};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::steps;

/// Result of enhancing one in-memory image
#[derive(Debug, Clone, Serialize)]
pub struct EnhanceResult {
    /// Enhanced image (not serialized)
    #[serde(skip)]
    pub image: DynamicImage,
    /// Whether the edge emphasis convolution ran
    pub edge_emphasis: bool,
    pub total_time_ms: u64,
    pub steps: Vec<StepTiming>,
}

/// Outcome of enhancing one file on disk
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub edge_emphasis: bool,
    pub total_time_ms: u64,
    pub steps: Vec<StepTiming>,
}

/// Enhancement pipeline with fixed step order:
/// flatten, denoise, sharpen, contrast, then edge emphasis when sharpen > 1.3
#[derive(Debug, Clone)]
pub struct Enhancer {
    params: EnhanceParams,
}

impl Enhancer {
    pub fn new(params: EnhanceParams) -> Result<Self, ProcessError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &EnhanceParams {
        &self.params
    }

    /// Enhance an image in memory
    pub fn process(&self, image: DynamicImage) -> Result<EnhanceResult, ProcessError> {
        let start = Instant::now();
        let mut timings = Vec::new();
        let params = self.params;

        let mut img = run_step("flatten", image, &mut timings, steps::flatten::apply)?;
        img = run_step("denoise", img, &mut timings, |img| {
            steps::denoise::apply(img, params.median_window())
        })?;
        img = run_step("sharpen", img, &mut timings, |img| {
            steps::sharpen::apply(img, params.sharpen)
        })?;
        img = run_step("contrast", img, &mut timings, |img| {
            steps::contrast::apply(img, params.contrast)
        })?;

        let edge_emphasis = params.edge_emphasis_enabled();
        if edge_emphasis {
            img = run_step("edge_emphasis", img, &mut timings, |img| {
                steps::edge::apply(img, params.sharpen)
            })?;
        }

        Ok(EnhanceResult {
            image: img,
            edge_emphasis,
            total_time_ms: start.elapsed().as_millis() as u64,
            steps: timings,
        })
    }

    /// Decode `input`, enhance it and save to `output` in the format its extension names
    pub fn enhance_file(&self, input: &Path, output: &Path) -> Result<FileReport, ProcessError> {
        let image = image::open(input).map_err(|source| ProcessError::Decode {
            path: input.to_path_buf(),
            source,
        })?;

        let result = self.process(image)?;
        save(&result.image, output)?;

        Ok(FileReport {
            file: display_name(input),
            output: output.to_path_buf(),
            width: result.image.width(),
            height: result.image.height(),
            edge_emphasis: result.edge_emphasis,
            total_time_ms: result.total_time_ms,
            steps: result.steps,
        })
    }
}

/// Save using the format implied by the extension.
/// The GIF encoder works on RGBA frames.
pub fn save(image: &DynamicImage, path: &Path) -> Result<(), ProcessError> {
    let write_error = |source| ProcessError::Write {
        path: path.to_path_buf(),
        source,
    };
    let format = ImageFormat::from_path(path).map_err(write_error)?;
    let saved = if format == ImageFormat::Gif {
        DynamicImage::ImageRgba8(image.to_rgba8()).save_with_format(path, format)
    } else {
        image.save_with_format(path, format)
    };
    saved.map_err(write_error)
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
