//! Required-field checks shared by the create endpoints.

use crate::error::CoreError;

/// Require a non-empty string field, naming the field in the error.
pub fn require_str(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(CoreError::Validation(format!("Field {field} is required"))),
    }
}

/// Require a present (typed) field, naming the field in the error.
pub fn require_some<T>(field: &str, value: &Option<T>) -> Result<(), CoreError> {
    if value.is_some() {
        return Ok(());
    }
    Err(CoreError::Validation(format!("Field {field} is required")))
}
