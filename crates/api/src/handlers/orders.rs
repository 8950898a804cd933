//! Handlers for the `/orders` resource: booking CRUD with a status
//! lifecycle.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;

use zootaxi_core::error::CoreError;
use zootaxi_core::order::{self, STATUS_NEW};
use zootaxi_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use zootaxi_core::validate::{require_some, require_str};
use zootaxi_db::models::order::{CreateOrder, UpdateOrder};
use zootaxi_db::repositories::OrderRepo;

use crate::error::{AppError, AppJson, AppResult};
use crate::query::IdParam;
use crate::state::AppState;

/// Query parameters for `GET /orders`.
#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    /// Exact status filter; absent or `all` means no filter.
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// GET /orders
// ---------------------------------------------------------------------------

/// List orders newest-first with optional status filter and pagination.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<OrderListQuery>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);
    let status = params
        .status
        .as_deref()
        .filter(|s| !s.is_empty() && *s != "all");

    let orders = OrderRepo::list(&state.pool, status, limit, offset).await?;
    let total = OrderRepo::count(&state.pool, status).await?;

    Ok(Json(serde_json::json!({
        "orders": orders,
        "total": total,
        "limit": limit,
        "offset": offset,
    })))
}

// ---------------------------------------------------------------------------
// POST /orders
// ---------------------------------------------------------------------------

/// Create a new booking. Status is forced to `new`.
pub async fn create_order(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateOrder>,
) -> AppResult<impl IntoResponse> {
    require_str("client_name", input.client_name.as_deref())?;
    require_str("client_phone", input.client_phone.as_deref())?;
    require_str("pet_type", input.pet_type.as_deref())?;
    require_str("service_type", input.service_type.as_deref())?;
    require_str("pickup_address", input.pickup_address.as_deref())?;
    require_str("destination_address", input.destination_address.as_deref())?;
    require_some("preferred_date", &input.preferred_date)?;
    require_some("preferred_time", &input.preferred_time)?;

    if let Some(price) = input.estimated_price {
        if price < Decimal::ZERO {
            return Err(AppError::Core(CoreError::Validation(
                "estimated_price must not be negative".to_string(),
            )));
        }
    }

    let id = OrderRepo::create(&state.pool, &input).await?;

    tracing::info!(order_id = id, "Order created");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "id": id,
            "message": "Order created successfully",
            "status": STATUS_NEW,
        })),
    ))
}

// ---------------------------------------------------------------------------
// PUT /orders
// ---------------------------------------------------------------------------

/// Update an order's status and/or estimated price. The id travels in
/// the body.
pub async fn update_order(
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateOrder>,
) -> AppResult<impl IntoResponse> {
    let id = input.id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("Order id is required".to_string()))
    })?;

    if input.status.is_none() && input.estimated_price.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "Either status or estimated_price must be provided".to_string(),
        )));
    }

    if let Some(ref status) = input.status {
        order::validate_status(status)?;
    }

    if let Some(price) = input.estimated_price {
        if price < Decimal::ZERO {
            return Err(AppError::Core(CoreError::Validation(
                "estimated_price must not be negative".to_string(),
            )));
        }
    }

    let updated = OrderRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;

    tracing::info!(order_id = id, status = %updated.status, "Order updated");

    Ok(Json(serde_json::json!({
        "id": updated.id,
        "status": updated.status,
        "estimated_price": updated.estimated_price,
        "message": "Order updated",
    })))
}

// ---------------------------------------------------------------------------
// DELETE /orders?id=
// ---------------------------------------------------------------------------

/// Delete an order by id (query parameter).
pub async fn delete_order(
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
) -> AppResult<impl IntoResponse> {
    let id = params.id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("Order id is required".to_string()))
    })?;

    let deleted = OrderRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;

    tracing::info!(order_id = deleted, "Order deleted");

    Ok(Json(serde_json::json!({
        "id": deleted,
        "message": "Order deleted successfully",
    })))
}
