//! Customer review models, including the moderation update DTO.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use zootaxi_core::types::{DbId, Timestamp};

use super::double_option;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub rating: i32,
    pub title: Option<String>,
    pub content: String,
    pub service_type: Option<String>,
    pub trip_date: Option<NaiveDate>,
    pub is_published: bool,
    pub is_featured: bool,
    pub moderator_notes: Option<String>,
    pub admin_reply: Option<String>,
    pub reply_author: Option<String>,
    pub replied_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub published_at: Option<Timestamp>,
    pub updated_at: Timestamp,
}

/// DTO for creating a new review. New rows always start unpublished.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub rating: Option<i32>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub service_type: Option<String>,
    pub trip_date: Option<NaiveDate>,
    pub moderator_notes: Option<String>,
}

/// DTO for the moderation update. Outer `Option` tracks field presence,
/// inner `Option` an explicit null, so `{"moderator_notes": null}`
/// clears the column while omitting the key leaves it unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReview {
    pub id: Option<DbId>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub moderator_notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub admin_reply: Option<Option<String>>,
    pub reply_author: Option<String>,
}

impl UpdateReview {
    /// Whether any recognized updatable field was supplied.
    pub fn has_changes(&self) -> bool {
        self.is_published.is_some()
            || self.is_featured.is_some()
            || self.moderator_notes.is_some()
            || self.admin_reply.is_some()
    }
}

/// Row returned by the review update statement.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewUpdateResult {
    pub id: DbId,
    pub is_published: bool,
    pub is_featured: bool,
    pub admin_reply: Option<String>,
    pub reply_author: Option<String>,
    pub replied_at: Option<Timestamp>,
}
