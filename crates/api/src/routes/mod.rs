//! Route definitions, one module per resource.

pub mod analytics;
pub mod health;
pub mod notifications;
pub mod orders;
pub mod passengers;
pub mod reviews;
pub mod upload;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /orders            GET list, POST create, PUT update, DELETE ?id=
/// /reviews           GET list, POST create, PUT moderate, DELETE ?id=
/// /passengers        GET list, POST create, PUT ?id=, DELETE ?id=
/// /analytics         POST record visit, GET aggregate stats
/// /notifications     POST dispatch Telegram/email alert
/// /upload-image      POST decode base64 payload
/// ```
///
/// The resource routers are merged (not nested) so the 405 fallback
/// below covers every registered route.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(orders::router())
        .merge(reviews::router())
        .merge(passengers::router())
        .merge(analytics::router())
        .merge(notifications::router())
        .merge(upload::router())
        .method_not_allowed_fallback(method_not_allowed)
}

/// 405 handler with a JSON body matching the error envelope.
async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({
            "error": "Method not allowed",
            "code": "METHOD_NOT_ALLOWED",
        })),
    )
}
