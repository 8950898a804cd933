//! Route definition for image upload.
//!
//! Merged into the `/api/v1` tree by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Upload routes.
///
/// ```text
/// POST   /upload-image    -> upload_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/upload-image", post(upload::upload_image))
}
