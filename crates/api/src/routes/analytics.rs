//! Route definitions for visit analytics.
//!
//! Merged into the `/api/v1` tree by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Analytics routes.
///
/// ```text
/// POST   /analytics    -> record_visit
/// GET    /analytics    -> visit_summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/analytics",
        get(analytics::visit_summary).post(analytics::record_visit),
    )
}
