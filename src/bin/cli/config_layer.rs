//! Configuration Layer Management
//!
//! Defaults, then the optional YAML file, then command-line flags. Flags
//! only ever switch options on, so a flag left off never overrides the file.

use anyhow::Context;
use tracing::debug;

use crate::cli::args::Cli;
use scan2prism::ConverterConfig;

/// Trait for merging configuration layers
pub trait ConfigMerge<T> {
    /// Merge another configuration into this one, with the other taking priority
    fn merge_with(&mut self, other: T);
}

/// Overrides collected from the command line
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliOverrides {
    pub output_dir: Option<std::path::PathBuf>,
    pub pretty: bool,
    pub lenient: bool,
    pub escape_html: bool,
}

impl From<&Cli> for CliOverrides {
    fn from(cli: &Cli) -> Self {
        Self {
            output_dir: cli.out_dir.clone(),
            pretty: cli.pretty,
            lenient: cli.lenient,
            escape_html: cli.escape_html,
        }
    }
}

impl ConfigMerge<CliOverrides> for ConverterConfig {
    fn merge_with(&mut self, other: CliOverrides) {
        if let Some(dir) = other.output_dir {
            self.output_dir = Some(dir);
        }
        self.pretty |= other.pretty;
        self.lenient |= other.lenient;
        self.escape_html |= other.escape_html;
    }
}

/// Build the effective configuration for a run.
pub fn build_converter_config(cli: &Cli) -> anyhow::Result<ConverterConfig> {
    let mut config = match &cli.config {
        Some(path) => ConverterConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ConverterConfig::default(),
    };

    config.merge_with(CliOverrides::from(cli));
    config.validate()?;
    debug!(?config, "effective configuration");

    Ok(config)
}
