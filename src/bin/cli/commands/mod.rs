//! CLI Command Implementations
//!
//! - convert: scan report to Prism issue file conversion
//! - config: configuration helpers

pub mod config;
pub mod convert;

pub use config::print_default_config;
pub use convert::convert_command;
