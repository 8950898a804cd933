//! Handlers for the `/reviews` resource: customer reviews with a
//! moderation/publication workflow and admin replies.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use zootaxi_core::error::CoreError;
use zootaxi_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use zootaxi_core::review;
use zootaxi_core::validate::{require_some, require_str};
use zootaxi_db::models::review::{CreateReview, UpdateReview};
use zootaxi_db::repositories::review_repo::ReviewFilter;
use zootaxi_db::repositories::ReviewRepo;

use crate::error::{AppError, AppJson, AppResult};
use crate::query::IdParam;
use crate::state::AppState;

/// Query parameters for `GET /reviews`.
#[derive(Debug, Deserialize)]
pub struct ReviewListQuery {
    /// Moderation filter: `all`, `published`, `unpublished`, `featured`.
    pub status: Option<String>,
    /// When true, forces the published-only view regardless of `status`.
    pub public_only: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// GET /reviews
// ---------------------------------------------------------------------------

/// List reviews under the requested moderation filter.
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<ReviewListQuery>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);
    let public_only = params.public_only.unwrap_or(false);
    let status = params.status.as_deref().unwrap_or("all");

    let filter = ReviewFilter::from_params(status, public_only);

    let reviews = ReviewRepo::list(&state.pool, filter, public_only, limit, offset).await?;
    let total = ReviewRepo::count(&state.pool, filter).await?;

    Ok(Json(serde_json::json!({
        "reviews": reviews,
        "total": total,
        "limit": limit,
        "offset": offset,
    })))
}

// ---------------------------------------------------------------------------
// POST /reviews
// ---------------------------------------------------------------------------

/// Create a new review. New rows always start unpublished and unfeatured.
pub async fn create_review(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateReview>,
) -> AppResult<impl IntoResponse> {
    require_str("client_name", input.client_name.as_deref())?;
    require_some("rating", &input.rating)?;
    require_str("content", input.content.as_deref())?;

    if let Some(rating) = input.rating {
        review::validate_rating(rating)?;
    }

    let id = ReviewRepo::create(&state.pool, &input).await?;

    tracing::info!(review_id = id, "Review created");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "id": id,
            "message": "Review created successfully",
            "is_published": false,
        })),
    ))
}

// ---------------------------------------------------------------------------
// PUT /reviews
// ---------------------------------------------------------------------------

/// Apply a moderation update (publish/feature flags, moderator notes,
/// admin reply). The id travels in the body; field presence decides what
/// changes, so an explicit null clears a column.
pub async fn update_review(
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateReview>,
) -> AppResult<impl IntoResponse> {
    let id = input.id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("Review id is required".to_string()))
    })?;

    if !input.has_changes() {
        return Err(AppError::Core(CoreError::Validation(
            "No fields to update".to_string(),
        )));
    }

    let updated = ReviewRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id,
        }))?;

    tracing::info!(
        review_id = id,
        is_published = updated.is_published,
        "Review updated"
    );

    Ok(Json(serde_json::json!({
        "id": updated.id,
        "is_published": updated.is_published,
        "is_featured": updated.is_featured,
        "admin_reply": updated.admin_reply,
        "reply_author": updated.reply_author,
        "replied_at": updated.replied_at,
        "message": "Review updated",
    })))
}

// ---------------------------------------------------------------------------
// DELETE /reviews?id=
// ---------------------------------------------------------------------------

/// Delete a review by id (query parameter).
pub async fn delete_review(
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
) -> AppResult<impl IntoResponse> {
    let id = params.id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("Review id is required".to_string()))
    })?;

    let deleted = ReviewRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id,
        }))?;

    tracing::info!(review_id = deleted, "Review deleted");

    Ok(Json(serde_json::json!({
        "id": deleted,
        "message": "Review deleted",
    })))
}
