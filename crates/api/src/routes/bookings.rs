//! Route definitions for bookings.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// Mounted at `/bookings`: the public submission endpoint.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", post(bookings::create))
}

/// Mounted at `/admin/bookings` (session required).
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(bookings::list_admin))
        .route("/{id}", put(bookings::set_status))
}
