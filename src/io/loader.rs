//! Scan report loading.
//!
//! [`load_report`] fails on unreadable or malformed input.
//! [`load_report_lenient`] keeps the converter's historical behaviour of
//! logging the problem and carrying on: fields of the wrong type are zeroed
//! one by one, and only unreadable or unparseable input yields an empty
//! report.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, error, warn};

use super::salvage::salvage_report;
use crate::core::errors::{ConvertError, Result, ResultExt};
use crate::model::ScanReport;

/// Read and decode a scan report.
pub fn load_report(path: &Path) -> Result<ScanReport> {
    let bytes = fs::read(path).map_err(|err| {
        ConvertError::io(
            format!("Failed to read scan report at {}", path.display()),
            err,
        )
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read scan report");

    decode_report(&bytes).with_context(|| format!("Malformed scan report at {}", path.display()))
}

/// Read and decode a scan report, degrading instead of failing.
///
/// A mistyped field is zeroed and the rest of the document is kept. A file
/// that cannot be read or parsed as JSON at all yields an empty report.
pub fn load_report_lenient(path: &Path) -> ScanReport {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            error!(path = %path.display(), error = %err, "failed to read scan report");
            Vec::new()
        }
    };

    match decode_report(&bytes) {
        Ok(report) => report,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "scan report does not match the expected schema");
            match serde_json::from_slice::<Value>(&bytes) {
                Ok(value) => salvage_report(&value),
                Err(_) => {
                    warn!(path = %path.display(), "scan report is not JSON, using an empty report");
                    ScanReport::default()
                }
            }
        }
    }
}

/// Decode a scan report from raw JSON bytes.
pub fn decode_report(bytes: &[u8]) -> Result<ScanReport> {
    serde_json::from_slice(bytes)
        .map_err(|err| ConvertError::json(format!("Invalid scan report JSON: {err}"), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    const SAMPLE: &str = r#"{"ImageName":"img1","Findings":[{"NvdFinding":{"Cve":"CVE-2021-1","cvss_score":"9.8"},"Packages":[]}]}"#;

    #[test]
    fn test_load_report_basic() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();

        let report = load_report(file.path()).unwrap();
        assert_eq!(report.image_name, "img1");
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].nvd_finding.cve, "CVE-2021-1");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");

        let err = load_report(&missing).unwrap_err();
        match err {
            ConvertError::Io { message, .. } => assert!(message.contains("missing.json")),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_malformed_json_is_serialization_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"ImageName\": ").unwrap();

        let err = load_report(file.path()).unwrap_err();
        match err {
            ConvertError::Serialization { message, data_type, .. } => {
                assert!(message.starts_with("Malformed scan report at"));
                assert_eq!(data_type, Some("JSON".to_string()));
            }
            other => panic!("Expected Serialization error, got {other:?}"),
        }
    }

    #[test]
    fn test_lenient_missing_file_yields_empty_report() {
        let dir = TempDir::new().unwrap();
        let report = load_report_lenient(&dir.path().join("missing.json"));
        assert_eq!(report, ScanReport::default());
    }

    #[test]
    fn test_lenient_malformed_json_yields_empty_report() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let report = load_report_lenient(file.path());
        assert!(report.findings.is_empty());
        assert!(report.image_name.is_empty());
    }

    #[test]
    fn test_lenient_keeps_findings_around_a_mistyped_field() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"ImageName":"img","Findings":[{{"NvdFinding":{{"Cve":"CVE-1","References":"not-a-list"}}}},{{"NvdFinding":{{"Cve":"CVE-2"}}}}]}}"#
        )
        .unwrap();

        assert!(load_report(file.path()).is_err());

        let report = load_report_lenient(file.path());
        assert_eq!(report.image_name, "img");
        assert_eq!(report.findings.len(), 2);
        assert_eq!(report.findings[0].nvd_finding.cve, "CVE-1");
        assert!(report.findings[0].nvd_finding.references.is_empty());
        assert_eq!(report.findings[1].nvd_finding.cve, "CVE-2");
    }

    #[test]
    fn test_lenient_valid_file_matches_strict() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();

        assert_eq!(
            load_report_lenient(file.path()),
            load_report(file.path()).unwrap()
        );
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let report = decode_report(br#"{"ImageName":"x","ScanTime":"2024-01-01","Findings":[]}"#)
            .unwrap();
        assert_eq!(report.image_name, "x");
        assert!(report.findings.is_empty());
    }

    #[test]
    fn test_decode_empty_buffer_fails() {
        assert!(decode_report(b"").is_err());
    }
}
