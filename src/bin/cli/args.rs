//! CLI argument structures for the scan2prism binary.

use clap::Parser;
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convert a container-image scan report into a Prism issue file
#[derive(Parser, Debug)]
#[command(name = "scan2prism")]
#[command(version = VERSION)]
#[command(about = "Convert a container-image vulnerability scan report into a Prism issue file")]
#[command(long_about = "
Reads a scanner findings report (JSON) and writes the matching Prism issue
list to <name>_prism.json, where <name> is the input file name up to its
first dot.

Common Usage:

  # Convert a report into ./scan_prism.json
  scan2prism scan.json

  # Write into another directory, pretty-printed
  scan2prism --out-dir reports --pretty scan.json

  # Keep going with an empty issue list if the report is unreadable
  scan2prism --lenient scan.json
")]
pub struct Cli {
    /// Scan report to convert
    #[arg(required_unless_present = "print_default_config")]
    pub input: Option<PathBuf>,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the issue file is written to [default: current directory]
    #[arg(short, long, env = "SCAN2PRISM_OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Convert unreadable or malformed input into an empty issue list instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// HTML-escape package fields in technical details
    #[arg(long)]
    pub escape_html: bool,

    /// Print default configuration in YAML format and exit
    #[arg(long)]
    pub print_default_config: bool,
}
