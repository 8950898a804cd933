//! HTTP-level integration tests for the passenger gallery endpoints.
//!
//! Gallery mutations deliberately answer 200 even when the id matched
//! nothing; the tests pin that observed behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

fn valid_passenger() -> serde_json::Value {
    serde_json::json!({
        "pet_name": "Musya",
        "pet_type": "cat",
        "photo_url": "https://cdn.example/musya.jpg",
        "description": "First ride to the groomer",
        "is_published": true
    })
}

// ---------------------------------------------------------------------------
// Create / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_list_gallery_entry(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/passengers", valid_passenger()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert!(created["id"].as_i64().unwrap() > 0);

    // The listing is a bare array.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/passengers").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["pet_name"], "Musya");
    assert_eq!(entries[0]["photo_url"], "https://cdn.example/musya.jpg");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_requires_photo_url(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/passengers",
        serde_json::json!({"pet_name": "Musya"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("photo_url"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn optional_fields_default_to_empty(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/passengers",
        serde_json::json!({"photo_url": "https://cdn.example/p.jpg"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/passengers").await).await;
    let entry = &json.as_array().unwrap()[0];
    assert_eq!(entry["pet_name"], "");
    assert_eq!(entry["description"], "");
    assert_eq!(entry["is_published"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn published_filter_hides_unpublished_entries(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/passengers", valid_passenger()).await;

    let mut unpublished = valid_passenger();
    unpublished["is_published"] = serde_json::json!(false);
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/passengers", unpublished).await;

    let app = common::build_test_app(pool.clone());
    let all = body_json(get(app, "/api/v1/passengers").await).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool);
    let published = body_json(get(app, "/api/v1/passengers?published=true").await).await;
    assert_eq!(published.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_changes_only_supplied_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/passengers", valid_passenger()).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/passengers?id={id}"),
        serde_json::json!({"description": "Now a regular customer"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/passengers").await).await;
    let entry = &json.as_array().unwrap()[0];
    assert_eq!(entry["description"], "Now a regular customer");
    // Untouched fields survive.
    assert_eq!(entry["pet_name"], "Musya");
    assert_eq!(entry["photo_url"], "https://cdn.example/musya.jpg");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_without_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/passengers",
        serde_json::json!({"pet_name": "Musya"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_of_missing_id_still_returns_200(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/passengers?id=999999",
        serde_json::json!({"pet_name": "Ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_entry(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/passengers", valid_passenger()).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/passengers?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/passengers").await).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_of_missing_id_is_a_silent_noop(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/passengers?id=999999").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_without_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/passengers").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
