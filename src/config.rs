use crate::cli::{EnhanceArgs, SegmentArgs};
use crate::error::ProcessError;

pub const DEFAULT_SHARPEN: f32 = 1.5;
pub const DEFAULT_CONTRAST: f32 = 1.2;
pub const DEFAULT_DENOISE: u8 = 1;

/// Sharpen strengths above this also run the edge emphasis convolution
pub const EDGE_EMPHASIS_THRESHOLD: f32 = 1.3;

/// Speckle removal element side (pixels)
pub const DEFAULT_OPEN_KERNEL: u32 = 2;
/// Stroke merging element side (pixels), tied to the capture resolution
pub const DEFAULT_MERGE_KERNEL: u32 = 10;
/// Regions narrower or shorter than this are noise
pub const DEFAULT_MIN_BOX_SIDE: u32 = 5;
/// Regions shorter than this are fragments, tied to the capture resolution
pub const DEFAULT_MIN_BOX_HEIGHT: u32 = 20;
pub const DEFAULT_UPSCALE_FACTOR: u32 = 3;
pub const MAX_UPSCALE_FACTOR: u32 = 16;

/// Structuring elements are built from a mask image, which caps their side
pub const MAX_KERNEL_SIDE: u32 = 511;

/// Enhancer parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnhanceParams {
    pub sharpen: f32,
    pub contrast: f32,
    pub denoise: u8,
}

impl Default for EnhanceParams {
    fn default() -> Self {
        Self {
            sharpen: DEFAULT_SHARPEN,
            contrast: DEFAULT_CONTRAST,
            denoise: DEFAULT_DENOISE,
        }
    }
}

impl EnhanceParams {
    pub fn validate(&self) -> Result<(), ProcessError> {
        if !(1..=3).contains(&self.denoise) {
            return Err(ProcessError::InvalidParameter(format!(
                "denoise must be between 1 and 3, got {}",
                self.denoise
            )));
        }
        // Negative factors extrapolate past the degenerate image
        if !self.sharpen.is_finite() {
            return Err(ProcessError::InvalidParameter(format!(
                "sharpen must be a finite number, got {}",
                self.sharpen
            )));
        }
        if !self.contrast.is_finite() {
            return Err(ProcessError::InvalidParameter(format!(
                "contrast must be a finite number, got {}",
                self.contrast
            )));
        }
        Ok(())
    }

    /// Median window side for the configured denoise strength
    pub fn median_window(&self) -> u32 {
        if self.denoise == 1 {
            3
        } else {
            5
        }
    }

    pub fn edge_emphasis_enabled(&self) -> bool {
        self.sharpen > EDGE_EMPHASIS_THRESHOLD
    }
}

impl From<&EnhanceArgs> for EnhanceParams {
    fn from(args: &EnhanceArgs) -> Self {
        Self {
            sharpen: args.sharpen,
            contrast: args.contrast,
            denoise: args.denoise,
        }
    }
}

/// Rectangular structuring element size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelSize {
    pub width: u32,
    pub height: u32,
}

impl KernelSize {
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// Segmenter parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentParams {
    pub open_kernel: KernelSize,
    pub merge_kernel: KernelSize,
    pub min_box_side: u32,
    pub min_box_height: u32,
    pub upscale_factor: u32,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self {
            open_kernel: KernelSize::square(DEFAULT_OPEN_KERNEL),
            merge_kernel: KernelSize::square(DEFAULT_MERGE_KERNEL),
            min_box_side: DEFAULT_MIN_BOX_SIDE,
            min_box_height: DEFAULT_MIN_BOX_HEIGHT,
            upscale_factor: DEFAULT_UPSCALE_FACTOR,
        }
    }
}

impl SegmentParams {
    pub fn validate(&self) -> Result<(), ProcessError> {
        for (name, kernel) in [("open", self.open_kernel), ("merge", self.merge_kernel)] {
            if kernel.width == 0
                || kernel.height == 0
                || kernel.width > MAX_KERNEL_SIDE
                || kernel.height > MAX_KERNEL_SIDE
            {
                return Err(ProcessError::InvalidParameter(format!(
                    "{} kernel must be between 1x1 and {}x{}, got {}x{}",
                    name, MAX_KERNEL_SIDE, MAX_KERNEL_SIDE, kernel.width, kernel.height
                )));
            }
        }
        if !(1..=MAX_UPSCALE_FACTOR).contains(&self.upscale_factor) {
            return Err(ProcessError::InvalidParameter(format!(
                "upscale factor must be between 1 and {}, got {}",
                MAX_UPSCALE_FACTOR, self.upscale_factor
            )));
        }
        Ok(())
    }
}

impl From<&SegmentArgs> for SegmentParams {
    fn from(args: &SegmentArgs) -> Self {
        Self {
            open_kernel: KernelSize::square(args.open_kernel),
            merge_kernel: KernelSize::square(args.merge_kernel),
            min_box_side: args.min_side,
            min_box_height: args.min_height,
            upscale_factor: args.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_window_follows_denoise() {
        let mut params = EnhanceParams::default();
        assert_eq!(params.median_window(), 3);
        params.denoise = 2;
        assert_eq!(params.median_window(), 5);
        params.denoise = 3;
        assert_eq!(params.median_window(), 5);
    }

    #[test]
    fn test_edge_emphasis_boundary() {
        let mut params = EnhanceParams::default();
        params.sharpen = 1.3;
        assert!(!params.edge_emphasis_enabled());
        params.sharpen = 1.31;
        assert!(params.edge_emphasis_enabled());
    }

    #[test]
    fn test_enhance_validate_rejects_denoise_zero() {
        let params = EnhanceParams {
            denoise: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ProcessError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_enhance_validate_accepts_negative_factors() {
        let params = EnhanceParams {
            sharpen: -0.5,
            contrast: -1.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
        assert!(!params.edge_emphasis_enabled());
    }

    #[test]
    fn test_enhance_validate_rejects_non_finite() {
        let params = EnhanceParams {
            contrast: f32::NAN,
            ..Default::default()
        };
        assert!(params.validate().is_err());
        let params = EnhanceParams {
            sharpen: f32::INFINITY,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_segment_validate_bounds_upscale_factor() {
        for (factor, ok) in [(0, false), (1, true), (MAX_UPSCALE_FACTOR, true), (17, false)] {
            let params = SegmentParams {
                upscale_factor: factor,
                ..Default::default()
            };
            assert_eq!(params.validate().is_ok(), ok, "factor {}", factor);
        }
    }

    #[test]
    fn test_segment_validate_rejects_empty_kernel() {
        let params = SegmentParams {
            merge_kernel: KernelSize::square(0),
            ..Default::default()
        };
        assert!(params.validate().is_err());
        assert!(SegmentParams::default().validate().is_ok());
    }
}
