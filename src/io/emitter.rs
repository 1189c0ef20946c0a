//! Prism issue file output.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::config::DEFAULT_OUTPUT_SUFFIX;
use crate::core::errors::{ConvertError, Result};
use crate::model::PrismReport;

/// Output path for `input` using the default `_prism.json` suffix.
///
/// The input's file name is cut at its FIRST dot, so `scan.results.json`
/// becomes `scan_prism.json`.
pub fn output_path_for(input: &Path, out_dir: &Path) -> PathBuf {
    output_path_with_suffix(input, out_dir, DEFAULT_OUTPUT_SUFFIX)
}

/// Output path for `input` with an explicit suffix.
pub fn output_path_with_suffix(input: &Path, out_dir: &Path, suffix: &str) -> PathBuf {
    let file_name = input
        .file_name()
        .map(OsStr::to_string_lossy)
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();

    out_dir.join(format!("{stem}{suffix}"))
}

/// Encode a Prism report as JSON text.
pub fn encode_report(report: &PrismReport, pretty: bool) -> Result<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };

    encoded.map_err(|err| ConvertError::json(format!("Failed to encode Prism report: {err}"), err))
}

/// Write a Prism report to `path`, creating or truncating the file.
pub fn write_report(report: &PrismReport, path: &Path, pretty: bool) -> Result<()> {
    let content = encode_report(report, pretty)?;

    fs::write(path, &content).map_err(|err| {
        ConvertError::io(
            format!("Failed to write Prism report to {}", path.display()),
            err,
        )
    })?;
    debug!(path = %path.display(), bytes = content.len(), "wrote Prism report");
    Ok(())
}
