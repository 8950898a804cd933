//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for partial updates

pub mod analytics;
pub mod order;
pub mod passenger;
pub mod review;

use serde::{Deserialize, Deserializer};

/// Deserialize a field into `Some(inner)` so that, combined with
/// `#[serde(default)]`, an absent field stays `None` while an explicit
/// JSON `null` becomes `Some(None)`. Partial-update DTOs use this to
/// tell "leave unchanged" apart from "clear the column".
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
