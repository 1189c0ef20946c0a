//! Scanner report to Prism issue mapping.
//!
//! The mapping is a pure function of its input: one issue per finding, in
//! finding order, every issue pointing at the single host named after the
//! scanned image.

pub mod severity;
pub mod technical_details;

use tracing::debug;

use crate::model::{PrismHost, PrismIssue, PrismReport, ScanFinding, ScanReport};

pub use severity::{cvss_to_risk_rating, RiskRating};
pub use technical_details::{html_escape, technical_details};

/// Knobs for the mapping stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingOptions {
    /// Entity-encode package fields in technical details
    pub escape_html: bool,
}

/// Convert a scan report into a Prism report with default options.
pub fn map_report(report: ScanReport) -> PrismReport {
    map_report_with(report, &MappingOptions::default())
}

/// Convert a scan report into a Prism report.
pub fn map_report_with(report: ScanReport, options: &MappingOptions) -> PrismReport {
    let host = PrismHost::new(report.image_name);

    let issues = report
        .findings
        .into_iter()
        .map(|finding| map_finding(finding, &host, options))
        .collect();

    PrismReport::new(issues)
}

/// Convert one finding into a Prism issue affecting `host`.
pub fn map_finding(finding: ScanFinding, host: &PrismHost, options: &MappingOptions) -> PrismIssue {
    let technical_details = technical_details(&finding.packages, options.escape_html);
    let nvd = finding.nvd_finding;
    let rating = cvss_to_risk_rating(&nvd.cvss_score);

    debug!(
        cve = %nvd.cve,
        score = %nvd.cvss_score,
        rating = %rating,
        packages = finding.packages.len(),
        "mapped finding"
    );

    PrismIssue {
        cves: vec![nvd.cve.clone()],
        name: nvd.cve,
        original_risk_rating: rating,
        client_defined_risk_rating: rating,
        finding: nvd.description,
        recommendation: nvd.remediation,
        cvss_vector: nvd.cvss_vector,
        affected_hosts: vec![host.clone()],
        references: nvd.references,
        technical_details,
    }
}
