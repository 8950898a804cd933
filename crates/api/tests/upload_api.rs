//! HTTP-level integration tests for the image upload stub.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use sqlx::PgPool;

// 1x1 transparent PNG, 70 bytes decoded.
const PNG_B64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

#[sqlx::test(migrations = "../../db/migrations")]
async fn valid_upload_reports_decoded_size(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/upload-image",
        serde_json::json!({"image": PNG_B64, "filename": "pet.png"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["size"], 70);
    assert!(json["url"]
        .as_str()
        .unwrap()
        .starts_with("data:image/png;base64,"));
    let filename = json["filename"].as_str().unwrap();
    assert!(filename.ends_with(".png"));
    // UUID stem plus extension.
    assert_eq!(filename.len(), 36 + ".png".len());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn data_uri_prefix_is_stripped(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/upload-image",
        serde_json::json!({
            "image": format!("data:image/png;base64,{PNG_B64}"),
            "filename": "pet.png"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["size"], 70);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_filename_defaults_to_jpg(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/upload-image",
        serde_json::json!({"image": PNG_B64}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["filename"].as_str().unwrap().ends_with(".jpg"));
    assert!(json["url"]
        .as_str()
        .unwrap()
        .starts_with("data:image/jpg;base64,"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_base64_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/upload-image",
        serde_json::json!({"image": "!!!not-base64!!!", "filename": "pet.png"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("base64"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_image_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/upload-image",
        serde_json::json!({"filename": "pet.png"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("image"));
}
