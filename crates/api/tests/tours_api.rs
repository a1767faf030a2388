//! HTTP-level tests for the tour package endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_json, delete_authed, get, get_authed, login_admin, post_multipart_authed,
    put_json_authed, put_multipart_authed, RecordingMediaStore,
};
use sqlx::PgPool;

const TOUR_FIELDS: &[(&str, &str)] = &[
    ("title", "Dal Lake Houseboat Experience"),
    ("description", "Stay in a traditional houseboat."),
    ("price", "₹ 8,500"),
    ("duration", "2 Days / 1 Night"),
    ("features", "Hotel, Meals, Transport"),
    ("active", "true"),
];

fn parse_timestamp(value: &serde_json::Value) -> chrono::DateTime<chrono::FixedOffset> {
    chrono::DateTime::parse_from_rfc3339(value.as_str().expect("timestamp string"))
        .expect("RFC 3339 timestamp")
}

async fn create_tour(pool: &PgPool, cookie: &str, fields: &[(&str, &str)]) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_multipart_authed(app, "/api/admin/tours", fields, None, cookie).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_parses_comma_separated_features(pool: PgPool) {
    let cookie = login_admin(&pool).await;
    let json = create_tour(&pool, &cookie, TOUR_FIELDS).await;

    assert_eq!(json["message"], "Tour created successfully");
    let tour = &json["tour"];
    assert_eq!(
        tour["features"],
        serde_json::json!(["Hotel", "Meals", "Transport"])
    );
    assert_eq!(tour["active"], true);
    assert!(tour["id"].as_str().unwrap().starts_with("TOUR"));
    // Storage internals stay internal.
    assert!(tour.get("imagePublicId").is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_with_image_uploads_to_the_tours_folder(pool: PgPool) {
    let cookie = login_admin(&pool).await;
    let media = Arc::new(RecordingMediaStore::default());

    let app = common::build_test_app_with_media(pool.clone(), media.clone());
    let response = post_multipart_authed(
        app,
        "/api/admin/tours",
        TOUR_FIELDS,
        Some(("lake.jpg", b"\xFF\xD8fake-jpeg")),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let image = json["tour"]["image"].as_str().unwrap();
    assert!(image.starts_with("https://media.test/tours/"));
    assert_eq!(media.uploads.lock().await.as_slice(), ["tours"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn public_list_returns_only_active_newest_first(pool: PgPool) {
    let cookie = login_admin(&pool).await;

    let first = create_tour(&pool, &cookie, TOUR_FIELDS).await;
    let first_id = first["tour"]["id"].as_str().unwrap().to_string();
    create_tour(&pool, &cookie, TOUR_FIELDS).await;

    // Hide the first tour.
    let app = common::build_test_app(pool.clone());
    let response = put_json_authed(
        app,
        &format!("/api/admin/tours/{first_id}/status"),
        serde_json::json!({"active": false}),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/tours").await).await;
    let tours = json["tours"].as_array().unwrap();
    assert_eq!(tours.len(), 1);
    assert!(tours.iter().all(|t| t["active"] == true));

    // Admin sees both, newest first.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get_authed(app, "/api/admin/tours", &cookie).await).await;
    let tours = json["tours"].as_array().unwrap();
    assert_eq!(tours.len(), 2);
    let newest = parse_timestamp(&tours[0]["createdAt"]);
    let oldest = parse_timestamp(&tours[1]["createdAt"]);
    assert!(newest >= oldest);
}

#[sqlx::test(migrations = "../../migrations")]
async fn single_tour_lookup_and_404(pool: PgPool) {
    let cookie = login_admin(&pool).await;
    let created = create_tour(&pool, &cookie, TOUR_FIELDS).await;
    let id = created["tour"]["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/tours/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["tour"]["id"], *id);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/tours/TOUR0").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Tour not found");
}

#[sqlx::test(migrations = "../../migrations")]
async fn status_toggle_changes_only_the_active_flag(pool: PgPool) {
    let cookie = login_admin(&pool).await;
    let created = create_tour(&pool, &cookie, TOUR_FIELDS).await;
    let id = created["tour"]["id"].as_str().unwrap().to_string();
    let before = created["tour"].clone();

    let app = common::build_test_app(pool.clone());
    let response = put_json_authed(
        app,
        &format!("/api/admin/tours/{id}/status"),
        serde_json::json!({"active": false}),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Status updated");

    let app = common::build_test_app(pool.clone());
    let after = body_json(get(app, &format!("/api/tours/{id}")).await).await["tour"].clone();

    assert_eq!(after["active"], false);
    assert_eq!(after["title"], before["title"]);
    assert_eq!(after["price"], before["price"]);
    assert_eq!(after["features"], before["features"]);
    assert_eq!(after["createdAt"], before["createdAt"]);
    assert!(parse_timestamp(&after["updatedAt"]) >= parse_timestamp(&before["updatedAt"]));
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_without_new_image_keeps_the_existing_one(pool: PgPool) {
    let cookie = login_admin(&pool).await;
    let media = Arc::new(RecordingMediaStore::default());

    let app = common::build_test_app_with_media(pool.clone(), media.clone());
    let response = post_multipart_authed(
        app,
        "/api/admin/tours",
        TOUR_FIELDS,
        Some(("lake.jpg", b"bytes")),
        &cookie,
    )
    .await;
    let created = body_json(response).await;
    let id = created["tour"]["id"].as_str().unwrap().to_string();
    let original_image = created["tour"]["image"].as_str().unwrap().to_string();

    let app = common::build_test_app_with_media(pool.clone(), media.clone());
    let response = put_multipart_authed(
        app,
        &format!("/api/admin/tours/{id}"),
        &[("title", "Renamed Tour"), ("active", "true")],
        None,
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Tour updated successfully");

    let app = common::build_test_app(pool.clone());
    let tour = body_json(get(app, &format!("/api/tours/{id}")).await).await["tour"].clone();
    assert_eq!(tour["title"], "Renamed Tour");
    assert_eq!(tour["image"], original_image.as_str());
    // The only upload was the one at creation.
    assert_eq!(media.uploads.lock().await.len(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_unknown_tour_is_404(pool: PgPool) {
    let cookie = login_admin(&pool).await;
    let app = common::build_test_app(pool);
    let response = put_multipart_authed(
        app,
        "/api/admin/tours/TOUR0",
        &[("title", "ghost")],
        None,
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn delete_with_image_destroys_it_exactly_once(pool: PgPool) {
    let cookie = login_admin(&pool).await;
    let media = Arc::new(RecordingMediaStore::default());

    let app = common::build_test_app_with_media(pool.clone(), media.clone());
    let response = post_multipart_authed(
        app,
        "/api/admin/tours",
        TOUR_FIELDS,
        Some(("lake.jpg", b"bytes")),
        &cookie,
    )
    .await;
    let created = body_json(response).await;
    let id = created["tour"]["id"].as_str().unwrap().to_string();
    let image_url = created["tour"]["image"].as_str().unwrap().to_string();

    let app = common::build_test_app_with_media(pool.clone(), media.clone());
    let response = delete_authed(app, &format!("/api/admin/tours/{id}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Tour deleted successfully");

    // Exactly one destroy call, with the handle matching the URL's last
    // segment minus extension, folder-prefixed.
    let destroyed = media.destroyed.lock().await;
    assert_eq!(destroyed.len(), 1);
    let stem = image_url
        .rsplit('/')
        .next()
        .unwrap()
        .split('.')
        .next()
        .unwrap();
    assert_eq!(destroyed[0], format!("tours/{stem}"));
    drop(destroyed);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/tours/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn delete_without_image_never_calls_the_media_host(pool: PgPool) {
    let cookie = login_admin(&pool).await;
    let media = Arc::new(RecordingMediaStore::default());

    let app = common::build_test_app_with_media(pool.clone(), media.clone());
    let response =
        post_multipart_authed(app, "/api/admin/tours", TOUR_FIELDS, None, &cookie).await;
    let id = body_json(response).await["tour"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let app = common::build_test_app_with_media(pool.clone(), media.clone());
    let response = delete_authed(app, &format!("/api/admin/tours/{id}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert!(media.destroyed.lock().await.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn delete_unknown_tour_is_404(pool: PgPool) {
    let cookie = login_admin(&pool).await;
    let app = common::build_test_app(pool);
    let response = delete_authed(app, "/api/admin/tours/TOUR0", &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Tour not found");
}
