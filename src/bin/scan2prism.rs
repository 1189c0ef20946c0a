//! scan2prism CLI - container scan report to Prism issue file converter
//!
//! Reads one scanner report, writes one Prism issue file, and exits
//! non-zero with a message naming the failing stage if anything goes wrong.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging; RUST_LOG takes precedence over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.print_default_config {
        return cli::print_default_config();
    }

    let input = cli
        .input
        .clone()
        .context("an input scan report is required")?;
    cli::convert_command(&cli, &input)
}
