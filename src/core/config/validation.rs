//! Validation helper functions for configuration types.

use crate::core::errors::{ConvertError, Result};

/// Validate that a string value is not empty.
pub fn validate_non_empty(value: &str, field: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ConvertError::config_field(
            format!("{} must not be empty", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that a value can be appended to a file name without leaving its directory.
pub fn validate_file_suffix(value: &str, field: &str) -> Result<()> {
    if value.contains('/') || value.contains('\\') {
        return Err(ConvertError::config_field(
            format!("{} must not contain a path separator", field),
            field,
        ));
    }
    Ok(())
}
