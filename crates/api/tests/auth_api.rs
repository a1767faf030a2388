//! HTTP-level tests for authentication and session gating.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_authed, get, get_authed, login_admin, post_json, TEST_ADMIN_PASSWORD,
    TEST_ADMIN_USERNAME,
};
use sqlx::PgPool;
use wayfarer_db::repositories::UserRepo;

#[sqlx::test(migrations = "../../migrations")]
async fn bootstrap_login_creates_exactly_one_user(pool: PgPool) {
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 0);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({
            "username": TEST_ADMIN_USERNAME,
            "password": TEST_ADMIN_PASSWORD,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Login successful");
    assert_eq!(json["user"]["username"], TEST_ADMIN_USERNAME);
    assert_eq!(json["user"]["role"], "admin");

    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);

    // A second login authenticates against the stored account instead of
    // creating another one.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({
            "username": TEST_ADMIN_USERNAME,
            "password": TEST_ADMIN_PASSWORD,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn bootstrap_only_fires_for_the_configured_username(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({"username": "someone-else", "password": "whatever"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid credentials");
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn wrong_password_is_rejected(pool: PgPool) {
    login_admin(&pool).await; // provisions the bootstrap account

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({"username": TEST_ADMIN_USERNAME, "password": "nope"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid credentials");
}

#[sqlx::test(migrations = "../../migrations")]
async fn auth_check_reflects_session_state(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/auth/check").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["authenticated"], false);
    assert!(json["user"].is_null());

    let cookie = login_admin(&pool).await;
    let app = common::build_test_app(pool);
    let response = get_authed(app, "/api/auth/check", &cookie).await;
    let json = body_json(response).await;
    assert_eq!(json["authenticated"], true);
    assert_eq!(json["user"]["username"], TEST_ADMIN_USERNAME);
}

#[sqlx::test(migrations = "../../migrations")]
async fn logout_expires_the_cookie(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/auth/logout", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(axum::http::header::SET_COOKIE)
        .expect("logout must rewrite the cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("wayfarer_session="));

    assert_eq!(body_json(response).await["message"], "Logged out successfully");
}

#[sqlx::test(migrations = "../../migrations")]
async fn garbage_session_cookie_reads_as_unauthenticated(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_authed(
        app,
        "/api/admin/tours",
        "wayfarer_session=not-a-real-token",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../migrations")]
async fn every_admin_verb_requires_a_session(pool: PgPool) {
    let reads = [
        "/api/admin/tours",
        "/api/admin/testimonials",
        "/api/admin/gallery",
        "/api/admin/posts",
        "/api/admin/bookings",
        "/api/admin/contacts",
    ];
    for uri in reads {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "GET {uri}");
        let json = body_json(response).await;
        assert_eq!(json["error"], "Unauthorized", "GET {uri}");
    }

    // Mutations are rejected before their bodies are even examined.
    let app = common::build_test_app(pool.clone());
    let response = common::post_multipart_authed(
        app,
        "/api/admin/tours",
        &[("title", "x")],
        None,
        "wayfarer_session=forged",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool.clone());
    let response = common::put_json_authed(
        app,
        "/api/admin/bookings/BK1",
        serde_json::json!({"status": "confirmed"}),
        "",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool.clone());
    let response = delete_authed(app, "/api/admin/tours/TOUR1", "").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
