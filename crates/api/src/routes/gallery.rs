//! Route definitions for the photo gallery.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Mounted at `/gallery`.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(gallery::list_public))
}

/// Mounted at `/admin/gallery` (session required).
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list_admin).post(gallery::create))
        .route("/{id}", put(gallery::update).delete(gallery::delete))
}
