//! Review rating validation.

use crate::error::CoreError;

/// Inclusive rating bounds.
pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

/// Validate a review rating: an integer in `1..=5`.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if (RATING_MIN..=RATING_MAX).contains(&rating) {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Rating must be an integer between {RATING_MIN} and {RATING_MAX}"
    )))
}
