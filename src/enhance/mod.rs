//! Image quality enhancement for upscaled or distorted images

pub mod batch;
pub mod pipeline;
pub mod steps;

pub use batch::{process_folder, BatchReport, FailedFile};
pub use pipeline::{EnhanceResult, Enhancer, FileReport};
