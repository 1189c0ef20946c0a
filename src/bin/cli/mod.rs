//! CLI Module Organization
//!
//! - args: CLI argument structures
//! - commands: command execution logic
//! - config_layer: merging defaults, configuration file and flags
//! - output: terminal display of conversion results

pub mod args;
pub mod commands;
pub mod config_layer;
pub mod output;

// Re-export commonly used items for convenience
pub use args::*;
pub use commands::*;
