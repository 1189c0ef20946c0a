//! Prism issue file schema.

use serde::{Deserialize, Serialize};

use crate::mapping::severity::RiskRating;

/// Schema version written into every issue file.
pub const PRISM_FORMAT_VERSION: u32 = 1;

/// Root of a Prism issue file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrismReport {
    pub version: u32,
    pub issues: Vec<PrismIssue>,
}

impl PrismReport {
    /// Wrap issues in a report carrying the current format version.
    pub fn new(issues: Vec<PrismIssue>) -> Self {
        Self {
            version: PRISM_FORMAT_VERSION,
            issues,
        }
    }
}

impl Default for PrismReport {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// One vulnerability tied to the host it was found on.
///
/// Field order matches the order keys are written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrismIssue {
    pub name: String,
    pub original_risk_rating: RiskRating,
    pub client_defined_risk_rating: RiskRating,
    pub finding: String,
    pub recommendation: String,
    pub cvss_vector: String,
    pub affected_hosts: Vec<PrismHost>,
    pub cves: Vec<String>,
    pub references: Vec<String>,
    pub technical_details: String,
}

/// A host affected by an issue; for image scans, the image itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrismHost {
    pub name: String,
}

impl PrismHost {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
