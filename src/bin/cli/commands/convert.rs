//! The conversion command.

use std::path::Path;

use owo_colors::OwoColorize;
use tracing::info;

use crate::cli::args::Cli;
use crate::cli::config_layer::build_converter_config;
use crate::cli::output::display_conversion_summary;
use scan2prism::core::pipeline::convert_file;

/// Convert the report named on the command line.
pub fn convert_command(cli: &Cli, input: &Path) -> anyhow::Result<()> {
    let config = build_converter_config(cli)?;

    println!(
        "{} {}",
        "🔍 Looking for scan report:".bright_blue().bold(),
        input.display().to_string().cyan()
    );
    if input.is_file() {
        println!("{}", "✅ File found".bright_green());
    }

    let summary = convert_file(input, &config)?;

    println!(
        "{} {}",
        "📄 Created file:".bright_green().bold(),
        summary.output.display().to_string().cyan()
    );
    display_conversion_summary(&summary);
    info!(
        issues = summary.issue_count,
        output = %summary.output.display(),
        "conversion complete"
    );

    Ok(())
}
