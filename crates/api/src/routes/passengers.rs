//! Route definitions for the passenger photo gallery.
//!
//! Merged into the `/api/v1` tree by `api_routes()`. Update and delete
//! take their id from the `?id=` query parameter.

use axum::routing::get;
use axum::Router;

use crate::handlers::passengers;
use crate::state::AppState;

/// Gallery routes.
///
/// ```text
/// GET    /passengers    -> list_passengers
/// POST   /passengers    -> create_passenger
/// PUT    /passengers    -> update_passenger (?id=)
/// DELETE /passengers    -> delete_passenger (?id=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/passengers",
        get(passengers::list_passengers)
            .post(passengers::create_passenger)
            .put(passengers::update_passenger)
            .delete(passengers::delete_passenger),
    )
}
