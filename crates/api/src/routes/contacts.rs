//! Route definitions for contact submissions.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// Mounted at `/contact`: the public submission endpoint.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", post(contacts::create))
}

/// Mounted at `/admin/contacts` (session required).
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(contacts::list_admin))
        .route("/{id}", delete(contacts::delete))
}
