//! Individual segmentation steps

pub mod contours;
pub mod glyph;
pub mod grayscale;
pub mod morphology;
pub mod threshold;
