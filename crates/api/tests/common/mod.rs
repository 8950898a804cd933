//! Shared helpers for the HTTP-level integration tests.
//!
//! Tests drive the full production router (same middleware stack as
//! `main.rs`) via `tower::ServiceExt::oneshot`, without a TCP listener.

#![allow(dead_code)] // not every test binary uses every helper

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use zootaxi_api::config::ServerConfig;
use zootaxi_api::router::build_app_router;
use zootaxi_api::state::AppState;
use zootaxi_notify::{Dispatcher, NotifyConfig};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        database_url: "postgres://unused-in-tests".to_string(),
        notify: NotifyConfig::default(),
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
///
/// The dispatcher is built with empty credentials so notification tests
/// exercise the recorded-error paths without touching the network.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let dispatcher = Arc::new(Dispatcher::new(NotifyConfig::default()));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        dispatcher,
    };

    build_app_router(state, &config)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a JSON request with the given method.
pub async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
