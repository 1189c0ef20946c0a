//! Configuration types for the converter.
//!
//! Every option defaults to the plain conversion behaviour: compact JSON
//! written next to the current working directory, strict loading and raw
//! package fields in the technical-details table.

pub mod validation;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{ConvertError, Result};
use crate::mapping::MappingOptions;

pub use validation::{validate_file_suffix, validate_non_empty};

/// Suffix appended to the truncated input name to form the output file name.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_prism.json";

/// Main configuration for a conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Directory the issue file is written to (`None` = current directory)
    pub output_dir: Option<PathBuf>,

    /// Pretty-print the emitted JSON
    pub pretty: bool,

    /// Degrade unreadable or malformed input to an empty report instead of failing
    pub lenient: bool,

    /// Entity-encode package fields in the technical-details table
    pub escape_html: bool,

    /// Suffix of the output file name
    pub output_suffix: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            pretty: false,
            lenient: false,
            escape_html: false,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}

impl ConverterConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            ConvertError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(Into::into)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        validate_non_empty(&self.output_suffix, "output_suffix")?;
        validate_file_suffix(&self.output_suffix, "output_suffix")?;

        if let Some(dir) = &self.output_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConvertError::config_field(
                    "output_dir must not be empty when set",
                    "output_dir",
                ));
            }
        }

        Ok(())
    }

    /// Options consumed by the mapping stage
    pub fn mapping_options(&self) -> MappingOptions {
        MappingOptions {
            escape_html: self.escape_html,
        }
    }

    /// Directory the output file is placed in
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
