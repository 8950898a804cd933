//! Route definitions for booking orders.
//!
//! Merged into the `/api/v1` tree by `api_routes()`. The update takes
//! its id from the body, the delete from the `?id=` query parameter.

use axum::routing::get;
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Order routes.
///
/// ```text
/// GET    /orders    -> list_orders
/// POST   /orders    -> create_order
/// PUT    /orders    -> update_order
/// DELETE /orders    -> delete_order (?id=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/orders",
        get(orders::list_orders)
            .post(orders::create_order)
            .put(orders::update_order)
            .delete(orders::delete_order),
    )
}
