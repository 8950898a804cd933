//! Passenger photo gallery models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use zootaxi_core::types::{DbId, Timestamp};

/// A row from the `passengers_gallery` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Passenger {
    pub id: DbId,
    pub pet_name: String,
    pub pet_type: String,
    pub photo_url: String,
    pub description: String,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a gallery entry. Only `photo_url` is required; the
/// rest default to empty/false.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatePassenger {
    pub pet_name: String,
    pub pet_type: String,
    pub photo_url: String,
    pub description: String,
    pub is_published: bool,
}

/// DTO for a partial gallery update; absent fields stay unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePassenger {
    pub pet_name: Option<String>,
    pub pet_type: Option<String>,
    pub photo_url: Option<String>,
    pub description: Option<String>,
    pub is_published: Option<bool>,
}
