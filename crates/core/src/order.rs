//! Order status lifecycle validation.

use crate::error::CoreError;

/// Initial status assigned to every new order.
pub const STATUS_NEW: &str = "new";

/// The full status lifecycle of an order.
pub const VALID_STATUSES: &[&str] = &["new", "confirmed", "in_progress", "completed", "cancelled"];

/// Validate an order status value against the lifecycle whitelist.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Invalid order status '{status}', expected one of: {}",
        VALID_STATUSES.join(", ")
    )))
}
