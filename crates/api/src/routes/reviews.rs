//! Route definitions for customer reviews.
//!
//! Merged into the `/api/v1` tree by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Review routes.
///
/// ```text
/// GET    /reviews    -> list_reviews
/// POST   /reviews    -> create_review
/// PUT    /reviews    -> update_review
/// DELETE /reviews    -> delete_review (?id=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/reviews",
        get(reviews::list_reviews)
            .post(reviews::create_review)
            .put(reviews::update_review)
            .delete(reviews::delete_review),
    )
}
