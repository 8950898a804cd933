//! Repository for the `reviews` table.

use sqlx::PgPool;
use zootaxi_core::types::DbId;

use crate::models::review::{CreateReview, Review, ReviewUpdateResult, UpdateReview};

/// Column list for reviews queries.
const REVIEW_COLUMNS: &str = "id, client_name, client_email, client_phone, rating, title, \
    content, service_type, trip_date, is_published, is_featured, moderator_notes, \
    admin_reply, reply_author, replied_at, created_at, published_at, updated_at";

/// Moderation filter for review listings.
///
/// `public_only` wins over the status filter: the public site must never
/// see unpublished rows regardless of what the query string asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewFilter {
    All,
    Published,
    Unpublished,
    Featured,
}

impl ReviewFilter {
    /// Resolve the effective filter from the query parameters.
    pub fn from_params(status: &str, public_only: bool) -> Self {
        if public_only {
            return ReviewFilter::Published;
        }
        match status {
            "published" => ReviewFilter::Published,
            "unpublished" => ReviewFilter::Unpublished,
            "featured" => ReviewFilter::Featured,
            _ => ReviewFilter::All,
        }
    }

    /// Fixed WHERE clause for this filter.
    fn where_sql(self) -> &'static str {
        match self {
            ReviewFilter::All => "",
            ReviewFilter::Published => " WHERE is_published = true",
            ReviewFilter::Unpublished => " WHERE is_published = false",
            ReviewFilter::Featured => " WHERE is_featured = true",
        }
    }

    /// Featured and public listings float featured reviews to the top;
    /// moderation listings are pure recency.
    fn order_sql(self, public_only: bool) -> &'static str {
        if public_only || self == ReviewFilter::Featured {
            "is_featured DESC, created_at DESC"
        } else {
            "created_at DESC"
        }
    }
}

/// Provides CRUD and moderation operations for customer reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// List reviews under the given moderation filter.
    pub async fn list(
        pool: &PgPool,
        filter: ReviewFilter,
        public_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews{} ORDER BY {} LIMIT $1 OFFSET $2",
            filter.where_sql(),
            filter.order_sql(public_only),
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count reviews matching the same filter as [`ReviewRepo::list`].
    pub async fn count(pool: &PgPool, filter: ReviewFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM reviews{}", filter.where_sql());
        sqlx::query_scalar(&query).fetch_one(pool).await
    }

    /// Insert a new review, always unpublished and unfeatured.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO reviews (
                client_name, client_email, client_phone, rating, title, content,
                service_type, trip_date, is_published, is_featured, moderator_notes
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, false, false, $9)
             RETURNING id",
        )
        .bind(&input.client_name)
        .bind(&input.client_email)
        .bind(&input.client_phone)
        .bind(input.rating)
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.service_type)
        .bind(input.trip_date)
        .bind(&input.moderator_notes)
        .fetch_one(pool)
        .await
    }

    /// Apply a moderation update.
    ///
    /// One fixed statement; which columns actually change is decided by
    /// presence flags bound as parameters, so absent fields stay
    /// untouched while explicit nulls clear their column. Publishing
    /// stamps `published_at`, unpublishing clears it; a non-empty reply
    /// stamps `replied_at` and records the author when supplied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReview,
    ) -> Result<Option<ReviewUpdateResult>, sqlx::Error> {
        let set_published = input.is_published.is_some();
        let published = input.is_published.unwrap_or(false);
        let set_featured = input.is_featured.is_some();
        let featured = input.is_featured.unwrap_or(false);
        let set_notes = input.moderator_notes.is_some();
        let notes = input.moderator_notes.clone().flatten();
        let set_reply = input.admin_reply.is_some();
        let reply = input.admin_reply.clone().flatten();

        sqlx::query_as(
            "UPDATE reviews SET
                is_published = CASE WHEN $2 THEN $3 ELSE is_published END,
                published_at = CASE WHEN $2 THEN (CASE WHEN $3 THEN now() END)
                               ELSE published_at END,
                is_featured = CASE WHEN $4 THEN $5 ELSE is_featured END,
                moderator_notes = CASE WHEN $6 THEN $7 ELSE moderator_notes END,
                admin_reply = CASE WHEN $8 THEN $9 ELSE admin_reply END,
                replied_at = CASE WHEN $8 AND $9 IS NOT NULL AND $9 <> '' THEN now()
                             ELSE replied_at END,
                reply_author = CASE WHEN $8 AND $9 IS NOT NULL AND $9 <> '' AND $10 IS NOT NULL
                               THEN $10 ELSE reply_author END,
                updated_at = now()
             WHERE id = $1
             RETURNING id, is_published, is_featured, admin_reply, reply_author, replied_at",
        )
        .bind(id)
        .bind(set_published)
        .bind(published)
        .bind(set_featured)
        .bind(featured)
        .bind(set_notes)
        .bind(notes)
        .bind(set_reply)
        .bind(reply)
        .bind(&input.reply_author)
        .fetch_optional(pool)
        .await
    }

    /// Delete a review by id. `None` means no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("DELETE FROM reviews WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_only_forces_published_filter() {
        assert_eq!(
            ReviewFilter::from_params("unpublished", true),
            ReviewFilter::Published
        );
        assert_eq!(
            ReviewFilter::from_params("all", true),
            ReviewFilter::Published
        );
    }

    #[test]
    fn status_filter_resolves_without_public_only() {
        assert_eq!(ReviewFilter::from_params("all", false), ReviewFilter::All);
        assert_eq!(
            ReviewFilter::from_params("featured", false),
            ReviewFilter::Featured
        );
        assert_eq!(
            ReviewFilter::from_params("unpublished", false),
            ReviewFilter::Unpublished
        );
    }

    #[test]
    fn featured_and_public_listings_sort_featured_first() {
        assert_eq!(
            ReviewFilter::Featured.order_sql(false),
            "is_featured DESC, created_at DESC"
        );
        assert_eq!(
            ReviewFilter::Published.order_sql(true),
            "is_featured DESC, created_at DESC"
        );
        assert_eq!(ReviewFilter::All.order_sql(false), "created_at DESC");
    }
}
