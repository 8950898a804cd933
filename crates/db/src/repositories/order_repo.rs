//! Repository for the `orders` table.

use sqlx::PgPool;
use zootaxi_core::types::DbId;

use crate::models::order::{CreateOrder, Order, OrderUpdateResult, UpdateOrder};

/// Column list for orders queries.
const ORDER_COLUMNS: &str = "id, client_name, client_phone, client_email, pet_name, pet_type, \
    pet_breed, pet_weight, pet_special_needs, service_type, pickup_address, \
    destination_address, preferred_date, preferred_time, additional_services, \
    comments, estimated_price, status, created_at, updated_at";

/// Provides CRUD operations for booking orders.
pub struct OrderRepo;

impl OrderRepo {
    /// List orders newest-first, optionally filtered by exact status.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Order>, sqlx::Error> {
        match status {
            Some(status) => {
                let query = format!(
                    "SELECT {ORDER_COLUMNS} FROM orders
                     WHERE status = $1
                     ORDER BY created_at DESC
                     LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, Order>(&query)
                    .bind(status)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {ORDER_COLUMNS} FROM orders
                     ORDER BY created_at DESC
                     LIMIT $1 OFFSET $2"
                );
                sqlx::query_as::<_, Order>(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Count orders matching the same filter as [`OrderRepo::list`].
    pub async fn count(pool: &PgPool, status: Option<&str>) -> Result<i64, sqlx::Error> {
        match status {
            Some(status) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE status = $1")
                    .bind(status)
                    .fetch_one(pool)
                    .await
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM orders")
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// Insert a new order with status forced to `new`, returning its id.
    ///
    /// Required fields are validated by the caller; NOT NULL constraints
    /// back that up at the database level.
    pub async fn create(pool: &PgPool, input: &CreateOrder) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO orders (
                client_name, client_phone, client_email, pet_name, pet_type, pet_breed,
                pet_weight, pet_special_needs, service_type, pickup_address,
                destination_address, preferred_date, preferred_time, additional_services,
                comments, estimated_price, status
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
             RETURNING id",
        )
        .bind(&input.client_name)
        .bind(&input.client_phone)
        .bind(&input.client_email)
        .bind(&input.pet_name)
        .bind(&input.pet_type)
        .bind(&input.pet_breed)
        .bind(input.pet_weight)
        .bind(&input.pet_special_needs)
        .bind(&input.service_type)
        .bind(&input.pickup_address)
        .bind(&input.destination_address)
        .bind(input.preferred_date)
        .bind(input.preferred_time)
        .bind(&input.additional_services)
        .bind(&input.comments)
        .bind(input.estimated_price)
        .bind(zootaxi_core::order::STATUS_NEW)
        .fetch_one(pool)
        .await
    }

    /// Update status and/or price for an order. One fixed statement per
    /// combination of supplied fields; `None` means the row was absent.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOrder,
    ) -> Result<Option<OrderUpdateResult>, sqlx::Error> {
        match (&input.status, input.estimated_price) {
            (Some(status), Some(price)) => {
                sqlx::query_as(
                    "UPDATE orders
                     SET status = $2, estimated_price = $3, updated_at = now()
                     WHERE id = $1
                     RETURNING id, status, estimated_price",
                )
                .bind(id)
                .bind(status)
                .bind(price)
                .fetch_optional(pool)
                .await
            }
            (Some(status), None) => {
                sqlx::query_as(
                    "UPDATE orders
                     SET status = $2, updated_at = now()
                     WHERE id = $1
                     RETURNING id, status, estimated_price",
                )
                .bind(id)
                .bind(status)
                .fetch_optional(pool)
                .await
            }
            (None, Some(price)) => {
                sqlx::query_as(
                    "UPDATE orders
                     SET estimated_price = $2, updated_at = now()
                     WHERE id = $1
                     RETURNING id, status, estimated_price",
                )
                .bind(id)
                .bind(price)
                .fetch_optional(pool)
                .await
            }
            (None, None) => Ok(None),
        }
    }

    /// Delete an order by id. `None` means no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("DELETE FROM orders WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
