//! Repository for the `passengers_gallery` table.

use sqlx::PgPool;
use zootaxi_core::types::DbId;

use crate::models::passenger::{CreatePassenger, Passenger, UpdatePassenger};

/// Column list for gallery queries.
const PASSENGER_COLUMNS: &str =
    "id, pet_name, pet_type, photo_url, description, is_published, created_at, updated_at";

/// Provides CRUD operations for the passenger photo gallery.
pub struct PassengerRepo;

impl PassengerRepo {
    /// List gallery entries newest-first, optionally published only.
    pub async fn list(pool: &PgPool, published_only: bool) -> Result<Vec<Passenger>, sqlx::Error> {
        let query = if published_only {
            format!(
                "SELECT {PASSENGER_COLUMNS} FROM passengers_gallery
                 WHERE is_published = true
                 ORDER BY created_at DESC"
            )
        } else {
            format!(
                "SELECT {PASSENGER_COLUMNS} FROM passengers_gallery
                 ORDER BY created_at DESC"
            )
        };
        sqlx::query_as::<_, Passenger>(&query).fetch_all(pool).await
    }

    /// Insert a gallery entry, returning its id.
    pub async fn create(pool: &PgPool, input: &CreatePassenger) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO passengers_gallery (pet_name, pet_type, photo_url, description, is_published)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&input.pet_name)
        .bind(&input.pet_type)
        .bind(&input.photo_url)
        .bind(&input.description)
        .bind(input.is_published)
        .fetch_one(pool)
        .await
    }

    /// Update only the supplied fields; absent fields stay unchanged.
    /// Returns the affected-row count (callers currently ignore it).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePassenger,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE passengers_gallery SET
                pet_name = COALESCE($2, pet_name),
                pet_type = COALESCE($3, pet_type),
                photo_url = COALESCE($4, photo_url),
                description = COALESCE($5, description),
                is_published = COALESCE($6, is_published),
                updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.pet_name)
        .bind(&input.pet_type)
        .bind(&input.photo_url)
        .bind(&input.description)
        .bind(input.is_published)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a gallery entry. Returns the affected-row count; deleting
    /// a missing id is a silent no-op for callers.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM passengers_gallery WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
