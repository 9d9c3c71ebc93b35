use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to read image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported color mode: {0}")]
    UnsupportedMode(String),

    #[error("Failed to write image {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable code used in JSON reports
    pub fn code(&self) -> &'static str {
        match self {
            ProcessError::Decode { .. } => "DECODE_ERROR",
            ProcessError::UnsupportedMode(_) => "UNSUPPORTED_MODE",
            ProcessError::Write { .. } => "WRITE_ERROR",
            ProcessError::InvalidParameter(_) => "INVALID_PARAMETER",
            ProcessError::Io { .. } => "IO_ERROR",
        }
    }
}
