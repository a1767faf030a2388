//! Route definitions for testimonials.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Mounted at `/testimonials`.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(testimonials::list_public))
}

/// Mounted at `/admin/testimonials` (session required).
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonials::list_admin).post(testimonials::create))
        .route(
            "/{id}",
            put(testimonials::update).delete(testimonials::delete),
        )
}
