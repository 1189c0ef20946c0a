//! Load, map and emit, in that order.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::core::config::ConverterConfig;
use crate::core::errors::{ConvertError, Result};
use crate::io::emitter::{output_path_with_suffix, write_report};
use crate::io::loader::{load_report, load_report_lenient};
use crate::mapping::{map_report_with, RiskRating};
use crate::model::PrismReport;

/// Pipeline stage names used in error reports.
pub mod stage {
    pub const LOAD: &str = "load";
    pub const EMIT: &str = "emit";
}

/// Issue counts per risk rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub info: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl SeverityCounts {
    /// Count the original risk rating of every issue in `report`.
    pub fn from_report(report: &PrismReport) -> Self {
        let mut counts = Self::default();
        for issue in &report.issues {
            counts.record(issue.original_risk_rating);
        }
        counts
    }

    pub fn record(&mut self, rating: RiskRating) {
        *self.slot(rating) += 1;
    }

    pub fn get(&self, rating: RiskRating) -> usize {
        match rating {
            RiskRating::Info => self.info,
            RiskRating::Low => self.low,
            RiskRating::Medium => self.medium,
            RiskRating::High => self.high,
            RiskRating::Critical => self.critical,
        }
    }

    pub fn total(&self) -> usize {
        RiskRating::ALL.iter().map(|rating| self.get(*rating)).sum()
    }

    fn slot(&mut self, rating: RiskRating) -> &mut usize {
        match rating {
            RiskRating::Info => &mut self.info,
            RiskRating::Low => &mut self.low,
            RiskRating::Medium => &mut self.medium,
            RiskRating::High => &mut self.high,
            RiskRating::Critical => &mut self.critical,
        }
    }
}

/// What a conversion run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub image_name: String,
    pub issue_count: usize,
    pub severities: SeverityCounts,
}

/// Convert the scan report at `input` into a Prism issue file.
///
/// The output is written to the configured directory under the name
/// derived from `input`; see [`output_path_with_suffix`].
pub fn convert_file(input: &Path, config: &ConverterConfig) -> Result<ConversionSummary> {
    config.validate()?;

    info!(input = %input.display(), lenient = config.lenient, "loading scan report");
    let report = if config.lenient {
        load_report_lenient(input)
    } else {
        load_report(input).map_err(|err| {
            ConvertError::pipeline_failed(
                stage::LOAD,
                format!("could not load {}", input.display()),
                err,
            )
        })?
    };

    let image_name = report.image_name.clone();
    info!(image = %image_name, findings = report.findings.len(), "mapping findings");
    let prism = map_report_with(report, &config.mapping_options());

    let output = output_path_with_suffix(input, &config.output_dir(), &config.output_suffix);
    info!(output = %output.display(), issues = prism.issues.len(), "writing Prism report");
    write_report(&prism, &output, config.pretty).map_err(|err| {
        ConvertError::pipeline_failed(
            stage::EMIT,
            format!("could not write {}", output.display()),
            err,
        )
    })?;

    Ok(ConversionSummary {
        input: input.to_path_buf(),
        output,
        image_name,
        issue_count: prism.issues.len(),
        severities: SeverityCounts::from_report(&prism),
    })
}
