//! Scanner report schema.
//!
//! Keys are matched case-sensitively. Missing keys and explicit `null`
//! values both decode to empty values, unknown keys are ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// One scanned image and everything found in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Identifier of the scanned artifact
    #[serde(rename = "ImageName", alias = "image_name", default, deserialize_with = "nullable")]
    pub image_name: String,

    /// Findings in scanner order
    #[serde(rename = "Findings", default, deserialize_with = "nullable")]
    pub findings: Vec<ScanFinding>,
}

/// A single vulnerability finding and the packages it affects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanFinding {
    #[serde(rename = "NvdFinding", default, deserialize_with = "nullable")]
    pub nvd_finding: NvdFinding,

    #[serde(rename = "Packages", default, deserialize_with = "nullable")]
    pub packages: Vec<Package>,
}

/// NVD details attached to a finding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NvdFinding {
    #[serde(rename = "Title", default, deserialize_with = "nullable")]
    pub title: String,

    #[serde(rename = "Description", default, deserialize_with = "nullable")]
    pub description: String,

    #[serde(rename = "Status", default, deserialize_with = "nullable")]
    pub status: String,

    /// Raw CVSS vector, passed through untouched
    #[serde(default, deserialize_with = "nullable")]
    pub cvss_vector: String,

    /// CVSS base score as decimal text; may be empty or malformed
    #[serde(default, deserialize_with = "score_text")]
    pub cvss_score: String,

    #[serde(rename = "Cve", default, deserialize_with = "nullable")]
    pub cve: String,

    #[serde(rename = "Remediation", default, deserialize_with = "nullable")]
    pub remediation: String,

    #[serde(rename = "References", default, deserialize_with = "nullable")]
    pub references: Vec<String>,
}

/// A package affected by a finding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    #[serde(rename = "Name", default, deserialize_with = "nullable")]
    pub name: String,

    #[serde(rename = "Version", default, deserialize_with = "nullable")]
    pub version: String,

    #[serde(rename = "Type", default, deserialize_with = "nullable")]
    pub kind: String,
}

/// Decode `null` as the type's default value.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Scores are text in the scanner schema, but some exporters emit bare numbers.
fn score_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScore {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<RawScore>::deserialize(deserializer)? {
        Some(RawScore::Text(text)) => text,
        Some(RawScore::Number(number)) => number.to_string(),
        None => String::new(),
    })
}
