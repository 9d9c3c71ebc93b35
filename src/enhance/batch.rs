use crate::config::EnhanceParams;
use crate::error::ProcessError;
use crate::formats;
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::pipeline::{display_name, Enhancer, FileReport};

/// A file that could not be enhanced
#[derive(Debug, Clone, Serialize)]
pub struct FailedFile {
    pub file: String,
    pub code: String,
    pub error: String,
}

/// Summary of one folder run
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub enhanced: Vec<FileReport>,
    pub failed: Vec<FailedFile>,
    /// Directory entries without a supported extension
    pub skipped: usize,
}

/// Enhance every supported image directly inside `input`, writing files
/// with the same names into `output`. A failing file is logged and skipped.
pub fn process_folder(
    input: &Path,
    output: &Path,
    params: EnhanceParams,
) -> Result<BatchReport, ProcessError> {
    let enhancer = Enhancer::new(params)?;

    fs::create_dir_all(output).map_err(|e| ProcessError::io(output, e))?;
    let entries = fs::read_dir(input).map_err(|e| ProcessError::io(input, e))?;

    let mut report = BatchReport::default();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Failed to read entry in {}: {}", input.display(), e);
                continue;
            }
        };

        let path = entry.path();
        if !formats::is_supported(&path) {
            tracing::debug!("Skipping unsupported file {}", path.display());
            report.skipped += 1;
            continue;
        }

        let name = display_name(&path);
        let target = output.join(entry.file_name());
        match enhancer.enhance_file(&path, &target) {
            Ok(file_report) => {
                tracing::info!(
                    "Enhanced {} in {}ms{}",
                    name,
                    file_report.total_time_ms,
                    if file_report.edge_emphasis {
                        " (edge emphasis)"
                    } else {
                        ""
                    }
                );
                report.enhanced.push(file_report);
            }
            Err(e) => {
                tracing::error!("Failed to enhance {}: {}", name, e);
                report.failed.push(FailedFile {
                    file: name,
                    code: e.code().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}
