use crate::config::SegmentParams;
use crate::error::ProcessError;
use crate::timing::{run_step, StepTiming};
use image::{ImageFormat, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::steps;
use super::steps::contours::BoundingBox;

/// One saved character image
#[derive(Debug, Clone, Serialize)]
pub struct GlyphRecord {
    /// 1-based index used in the file name
    pub index: usize,
    pub file: PathBuf,
    pub bbox: BoundingBox,
}

/// Result of detecting character regions in one image
#[derive(Debug, Clone, Serialize)]
pub struct Detection {
    pub otsu_level: u8,
    /// Retained boxes in discovery order
    pub boxes: Vec<BoundingBox>,
    /// Number of boxes dropped by the size filter
    pub discarded: usize,
    pub steps: Vec<StepTiming>,
}

/// Summary of one segmentation run
#[derive(Debug, Clone, Serialize)]
pub struct SegmentationReport {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub count: usize,
    pub discarded: usize,
    pub otsu_level: u8,
    pub glyphs: Vec<GlyphRecord>,
    pub total_time_ms: u64,
    pub steps: Vec<StepTiming>,
}

/// File name of the `index`-th saved character
pub fn glyph_file_name(index: usize) -> String {
    format!("char_{}.png", index)
}

/// Character segmentation pipeline:
/// grayscale, Otsu threshold, opening, dilation, external contours, size filter
#[derive(Debug, Clone)]
pub struct Segmenter {
    params: SegmentParams,
}

impl Segmenter {
    pub fn new(params: SegmentParams) -> Result<Self, ProcessError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &SegmentParams {
        &self.params
    }

    /// Find character-sized regions in a color raster.
    /// The morphology only drives detection, the raster itself is not modified.
    pub fn detect(&self, color: &RgbImage) -> Detection {
        let mut timings = Vec::new();
        let params = self.params;

        let gray = run_step("grayscale", color, &mut timings, steps::grayscale::apply);
        let (binary, otsu_level) =
            run_step("threshold", &gray, &mut timings, steps::threshold::apply);
        let clean = run_step("open", &binary, &mut timings, |mask| {
            steps::morphology::open(mask, params.open_kernel)
        });
        let merged = run_step("dilate", &clean, &mut timings, |mask| {
            steps::morphology::dilate(mask, params.merge_kernel)
        });
        let candidates =
            run_step("contours", &merged, &mut timings, steps::contours::external_boxes);

        let total = candidates.len();
        let boxes: Vec<BoundingBox> = candidates
            .into_iter()
            .filter(|bbox| {
                let keep = bbox.is_glyph_sized(params.min_box_side, params.min_box_height);
                if !keep {
                    tracing::debug!(
                        "Discarding {}x{} region at ({}, {})",
                        bbox.width,
                        bbox.height,
                        bbox.x,
                        bbox.y
                    );
                }
                keep
            })
            .collect();

        Detection {
            otsu_level,
            discarded: total - boxes.len(),
            boxes,
            steps: timings,
        }
    }

    /// Segment the image at `input`, writing `char_1.png .. char_N.png` into `output_dir`
    pub fn segment_file(
        &self,
        input: &Path,
        output_dir: &Path,
    ) -> Result<SegmentationReport, ProcessError> {
        let start = Instant::now();

        fs::create_dir_all(output_dir).map_err(|e| ProcessError::io(output_dir, e))?;

        let color = image::open(input)
            .map_err(|source| ProcessError::Decode {
                path: input.to_path_buf(),
                source,
            })?
            .into_rgb8();
        tracing::debug!(
            "Loaded {} ({}x{})",
            input.display(),
            color.width(),
            color.height()
        );

        let detection = self.detect(&color);
        let mut timings = detection.steps;

        let glyphs = run_step("extract", detection.boxes.as_slice(), &mut timings, |boxes| {
            self.save_glyphs(&color, boxes, output_dir)
        })?;

        Ok(SegmentationReport {
            input: input.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            count: glyphs.len(),
            discarded: detection.discarded,
            otsu_level: detection.otsu_level,
            glyphs,
            total_time_ms: start.elapsed().as_millis() as u64,
            steps: timings,
        })
    }

    fn save_glyphs(
        &self,
        color: &RgbImage,
        boxes: &[BoundingBox],
        output_dir: &Path,
    ) -> Result<Vec<GlyphRecord>, ProcessError> {
        let mut glyphs = Vec::with_capacity(boxes.len());
        for (i, bbox) in boxes.iter().enumerate() {
            let index = i + 1;
            let glyph = steps::glyph::extract(color, bbox, self.params.upscale_factor)?;
            let path = output_dir.join(glyph_file_name(index));
            glyph
                .save_with_format(&path, ImageFormat::Png)
                .map_err(|source| ProcessError::Write {
                    path: path.clone(),
                    source,
                })?;
            tracing::info!(
                "Saved {} ({}x{} at {}, {})",
                path.display(),
                bbox.width,
                bbox.height,
                bbox.x,
                bbox.y
            );
            glyphs.push(GlyphRecord {
                index,
                file: path,
                bbox: *bbox,
            });
        }
        Ok(glyphs)
    }
}
