//! Cross-cutting behavior: 404 fallback, CORS headers, health check.

mod common;

use axum::http::{header, Request, StatusCode};
use axum::body::Body;
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../migrations")]
async fn unknown_api_path_is_endpoint_not_found(pool: PgPool) {
    for uri in ["/api/nope", "/api/admin/unknown", "/completely/elsewhere"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body_json(response).await["error"], "Endpoint not found", "{uri}");
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn responses_carry_permissive_cors_headers(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let request = Request::builder()
        .method("GET")
        .uri("/api/tours")
        .header(header::ORIGIN, "https://anywhere.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("CORS header present"),
        "*"
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn preflight_is_answered(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/bookings")
        .header(header::ORIGIN, "https://anywhere.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("CORS header present"),
        "*"
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn health_reports_database_reachability(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "up");
}
