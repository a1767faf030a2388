//! Route definitions for tour packages.
//!
//! Public routes mounted at `/tours`:
//!
//! ```text
//! GET /        -> list_public (active only)
//! GET /{id}    -> get_public
//! ```
//!
//! Admin routes mounted at `/admin/tours` (session required):
//!
//! ```text
//! GET    /              -> list_admin
//! POST   /              -> create (multipart)
//! PUT    /{id}          -> update (multipart)
//! PUT    /{id}/status   -> set_status (JSON)
//! DELETE /{id}          -> delete
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::tours;
use crate::state::AppState;

pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(tours::list_public))
        .route("/{id}", get(tours::get_public))
}

pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(tours::list_admin).post(tours::create))
        .route("/{id}", put(tours::update).delete(tours::delete))
        .route("/{id}/status", put(tours::set_status))
}
