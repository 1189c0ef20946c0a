//! # scan2prism: container scan reports to Prism issue files
//!
//! Converts the JSON findings report of a container-image vulnerability
//! scanner into the issue-list JSON imported by the Prism risk-management
//! platform.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ScanReport   ┌──────────┐   PrismReport   ┌──────────┐
//! │  Loader  │ ─────────────▶ │  Mapper  │ ──────────────▶ │ Emitter  │
//! │ io::     │                │ mapping  │                 │ io::     │
//! │ loader   │                │ (pure)   │                 │ emitter  │
//! └──────────┘                └──────────┘                 └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use scan2prism::{convert_file, ConverterConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = convert_file(Path::new("scan.json"), &ConverterConfig::default())?;
//!     println!("{} issues written to {}", summary.issue_count, summary.output.display());
//!     Ok(())
//! }
//! ```

#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Configuration, errors and the conversion driver
pub mod core {
    //! Configuration, error types and the conversion pipeline.

    pub mod config;
    pub mod errors;
    pub mod pipeline;
}

// Reading scan reports and writing issue files
pub mod io {
    //! File loading and emitting.

    pub mod emitter;
    pub mod loader;
    mod salvage;
}

pub mod mapping;
pub mod model;

// Re-export primary types for convenience
pub use crate::core::config::ConverterConfig;
pub use crate::core::errors::{ConvertError, Result, ResultExt};
pub use crate::core::pipeline::{convert_file, ConversionSummary, SeverityCounts};
pub use crate::mapping::{cvss_to_risk_rating, map_report, RiskRating};
pub use crate::model::{PrismReport, ScanReport};
