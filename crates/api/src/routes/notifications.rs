//! Route definition for outbound notifications.
//!
//! Merged into the `/api/v1` tree by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

/// Notification routes.
///
/// ```text
/// POST   /notifications    -> send_notifications
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/notifications", post(notifications::send_notifications))
}
