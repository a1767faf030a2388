//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router
//! without a TCP listener. The app is built with the same middleware stack
//! as production and a recording fake standing in for the image host.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use wayfarer_api::config::{BootstrapAdmin, ServerConfig, SessionConfig};
use wayfarer_api::router::build_app_router;
use wayfarer_api::state::AppState;
use wayfarer_media::{MediaError, MediaStore, StoredImage};

/// Bootstrap credentials used by the test config.
pub const TEST_ADMIN_USERNAME: &str = "admin123";
pub const TEST_ADMIN_PASSWORD: &str = "admiN@123";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        session: SessionConfig {
            secret: "integration-test-session-secret".to_string(),
            ttl_hours: 24,
        },
        bootstrap: BootstrapAdmin {
            username: TEST_ADMIN_USERNAME.to_string(),
            password: TEST_ADMIN_PASSWORD.to_string(),
        },
    }
}

/// Image host fake that records every upload and destroy call.
#[derive(Default)]
pub struct RecordingMediaStore {
    counter: AtomicUsize,
    pub uploads: tokio::sync::Mutex<Vec<String>>,
    pub destroyed: tokio::sync::Mutex<Vec<String>>,
}

#[async_trait]
impl MediaStore for RecordingMediaStore {
    async fn upload(&self, _bytes: Vec<u8>, folder: &str) -> Result<StoredImage, MediaError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        self.uploads.lock().await.push(folder.to_string());
        Ok(StoredImage {
            url: format!("https://media.test/{folder}/img{n}.jpg"),
            public_id: format!("{folder}/img{n}"),
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), MediaError> {
        self.destroyed.lock().await.push(public_id.to_string());
        Ok(())
    }
}

/// Build the application router over the given pool and media store.
pub fn build_test_app_with_media(pool: PgPool, media: Arc<dyn MediaStore>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        media,
    };
    build_app_router(state, &config)
}

/// Build the application router with a throwaway recording media store.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_media(pool, Arc::new(RecordingMediaStore::default()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Boundary used by the handcrafted multipart bodies below.
const BOUNDARY: &str = "wayfarer-test-boundary";

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_authed(app: Router, uri: &str, cookie: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json_authed(
    app: Router,
    uri: &str,
    json: serde_json::Value,
    cookie: &str,
) -> Response {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, cookie)
        .body(Body::from(json.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete_authed(app: Router, uri: &str, cookie: &str) -> Response {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Assemble a multipart/form-data body from text fields plus an optional
/// `image` file part.
pub fn multipart_body(fields: &[(&str, &str)], image: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; \
                 filename=\"{filename}\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn send_multipart(
    app: Router,
    method: &str,
    uri: &str,
    fields: &[(&str, &str)],
    image: Option<(&str, &[u8])>,
    cookie: &str,
) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(header::COOKIE, cookie)
        .body(Body::from(multipart_body(fields, image)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_multipart_authed(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    image: Option<(&str, &[u8])>,
    cookie: &str,
) -> Response {
    send_multipart(app, "POST", uri, fields, image, cookie).await
}

pub async fn put_multipart_authed(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    image: Option<(&str, &[u8])>,
    cookie: &str,
) -> Response {
    send_multipart(app, "PUT", uri, fields, image, cookie).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Log in as the bootstrap admin and return the session cookie pair
/// (`name=value`) for use in subsequent requests.
pub async fn login_admin(pool: &PgPool) -> String {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({
            "username": TEST_ADMIN_USERNAME,
            "password": TEST_ADMIN_PASSWORD,
        }),
    )
    .await;
    assert_eq!(response.status(), 200, "bootstrap login should succeed");

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set the session cookie")
        .to_str()
        .unwrap();
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}
