//! Source and target document models.

pub mod source;
pub mod target;

pub use source::{NvdFinding, Package, ScanFinding, ScanReport};
pub use target::{PrismHost, PrismIssue, PrismReport, PRISM_FORMAT_VERSION};
