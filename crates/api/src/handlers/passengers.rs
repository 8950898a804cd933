//! Handlers for the `/passengers` photo gallery.
//!
//! Mutations deliberately skip the affected-row check: updating or
//! deleting a missing id is a silent no-op that still answers 200.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use zootaxi_core::error::CoreError;
use zootaxi_core::validate::require_str;
use zootaxi_db::models::passenger::{CreatePassenger, UpdatePassenger};
use zootaxi_db::repositories::PassengerRepo;

use crate::error::{AppError, AppJson, AppResult};
use crate::query::IdParam;
use crate::state::AppState;

/// Query parameters for `GET /passengers`.
#[derive(Debug, Deserialize)]
pub struct PassengerListQuery {
    /// When true, return only published entries.
    pub published: Option<bool>,
}

// ---------------------------------------------------------------------------
// GET /passengers
// ---------------------------------------------------------------------------

/// List gallery entries newest-first as a bare JSON array.
pub async fn list_passengers(
    State(state): State<AppState>,
    Query(params): Query<PassengerListQuery>,
) -> AppResult<impl IntoResponse> {
    let published_only = params.published.unwrap_or(false);
    let passengers = PassengerRepo::list(&state.pool, published_only).await?;
    Ok(Json(passengers))
}

// ---------------------------------------------------------------------------
// POST /passengers
// ---------------------------------------------------------------------------

/// Add a gallery entry. Only the photo URL is required.
pub async fn create_passenger(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePassenger>,
) -> AppResult<impl IntoResponse> {
    require_str("photo_url", Some(&input.photo_url))?;

    let id = PassengerRepo::create(&state.pool, &input).await?;

    tracing::info!(passenger_id = id, "Passenger added to gallery");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "id": id,
            "message": "Passenger added successfully",
        })),
    ))
}

// ---------------------------------------------------------------------------
// PUT /passengers?id=
// ---------------------------------------------------------------------------

/// Update the supplied fields of a gallery entry.
pub async fn update_passenger(
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
    AppJson(input): AppJson<UpdatePassenger>,
) -> AppResult<impl IntoResponse> {
    let id = params.id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("id parameter is required".to_string()))
    })?;

    PassengerRepo::update(&state.pool, id, &input).await?;

    Ok(Json(serde_json::json!({
        "message": "Passenger updated successfully",
    })))
}

// ---------------------------------------------------------------------------
// DELETE /passengers?id=
// ---------------------------------------------------------------------------

/// Delete a gallery entry by id (query parameter).
pub async fn delete_passenger(
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
) -> AppResult<impl IntoResponse> {
    let id = params.id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("id parameter is required".to_string()))
    })?;

    PassengerRepo::delete(&state.pool, id).await?;

    Ok(Json(serde_json::json!({
        "message": "Passenger deleted successfully",
    })))
}
