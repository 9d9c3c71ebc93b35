//! Image enhancement and character segmentation for scanned documents.
//!
//! Two independent pipelines built on `image` and `imageproc`:
//! [`enhance`] sharpens and cleans whole folders of images, and
//! [`segment`] cuts one page into one image per character.

pub mod cli;
pub mod config;
pub mod enhance;
pub mod error;
pub mod formats;
pub mod logging;
pub mod luma;
pub mod segment;
pub mod timing;

pub use config::{EnhanceParams, KernelSize, SegmentParams};
pub use error::ProcessError;
