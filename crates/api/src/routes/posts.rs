//! Route definitions for blog posts.
//!
//! The public single-item route is keyed by slug, not id; admin routes use
//! the post's public id.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Mounted at `/posts`.
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_public))
        .route("/{slug}", get(posts::get_public))
}

/// Mounted at `/admin/posts` (session required).
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_admin).post(posts::create))
        .route("/{id}", put(posts::update).delete(posts::delete))
}
