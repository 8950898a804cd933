//! Shared query parameter types for API handlers.

use serde::Deserialize;
use zootaxi_core::types::DbId;

/// `?id=` query parameter carrying a row id.
///
/// Optional so handlers can answer a missing id with a validation error
/// naming the field instead of a generic extractor rejection.
#[derive(Debug, Deserialize)]
pub struct IdParam {
    pub id: Option<DbId>,
}
