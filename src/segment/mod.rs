//! Character segmentation for scanned document images

pub mod pipeline;
pub mod steps;

pub use pipeline::{
    glyph_file_name, Detection, GlyphRecord, SegmentationReport, Segmenter,
};
pub use steps::contours::BoundingBox;
