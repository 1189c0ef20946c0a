//! CVSS score to Prism risk rating normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk rating understood by Prism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskRating {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskRating {
    /// All ratings, lowest first.
    pub const ALL: [RiskRating; 5] = [
        RiskRating::Info,
        RiskRating::Low,
        RiskRating::Medium,
        RiskRating::High,
        RiskRating::Critical,
    ];

    /// The label written to the issue file.
    pub fn as_str(self) -> &'static str {
        match self {
            RiskRating::Info => "Info",
            RiskRating::Low => "Low",
            RiskRating::Medium => "Medium",
            RiskRating::High => "High",
            RiskRating::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a CVSS score, as text, to a risk rating.
///
/// Unparseable text and an exact zero are `Info`. The Low, Medium and High
/// bands are open intervals; everything that misses them, including the
/// band edges and the gaps between bands, is `Critical`.
pub fn cvss_to_risk_rating(score: &str) -> RiskRating {
    let Ok(value) = score.parse::<f64>() else {
        tracing::debug!(score, "unparseable CVSS score, rating as Info");
        return RiskRating::Info;
    };

    if value == 0.0 {
        return RiskRating::Info;
    }
    if value > 0.1 && value < 3.9 {
        return RiskRating::Low;
    }
    if value > 4.0 && value < 6.9 {
        return RiskRating::Medium;
    }
    if value > 7.0 && value < 8.9 {
        return RiskRating::High;
    }

    RiskRating::Critical
}
