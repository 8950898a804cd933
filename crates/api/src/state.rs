use std::sync::Arc;

use zootaxi_notify::Dispatcher;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: zootaxi_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Notification dispatcher (Telegram + email fan-out).
    pub dispatcher: Arc<Dispatcher>,
}
