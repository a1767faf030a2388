//! Route table for the `/api` surface.

pub mod auth;
pub mod bookings;
pub mod contacts;
pub mod gallery;
pub mod health;
pub mod posts;
pub mod testimonials;
pub mod tours;

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;
use wayfarer_core::error::CoreError;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/check                      session probe (public)
/// /auth/login                      login (public)
/// /auth/logout                     logout (public)
///
/// /tours                           active tours (public)
/// /tours/{id}                      single tour (public)
/// /testimonials                    active testimonials (public)
/// /gallery                         active gallery, ?limit= (public)
/// /posts                           active posts (public)
/// /posts/{slug}                    single active post (public)
/// /bookings                        booking submission (public POST)
/// /contact                         contact submission (public POST)
///
/// /admin/tours                     list, create (session)
/// /admin/tours/{id}                update, delete
/// /admin/tours/{id}/status         visibility toggle (PUT, JSON)
/// /admin/testimonials[...]         same quartet
/// /admin/gallery[...]              same quartet
/// /admin/posts[...]                same quartet
/// /admin/bookings                  list (session)
/// /admin/bookings/{id}             status update (PUT, JSON)
/// /admin/contacts                  list (session)
/// /admin/contacts/{id}             delete (session)
/// ```
///
/// Anything else under `/api` falls through to a 404 "Endpoint not found".
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/tours", tours::public_router())
        .nest("/admin/tours", tours::admin_router())
        .nest("/testimonials", testimonials::public_router())
        .nest("/admin/testimonials", testimonials::admin_router())
        .nest("/gallery", gallery::public_router())
        .nest("/admin/gallery", gallery::admin_router())
        .nest("/posts", posts::public_router())
        .nest("/admin/posts", posts::admin_router())
        .nest("/bookings", bookings::public_router())
        .nest("/admin/bookings", bookings::admin_router())
        .nest("/contact", contacts::public_router())
        .nest("/admin/contacts", contacts::admin_router())
        .fallback(endpoint_not_found)
}

/// Catch-all for unknown `/api` paths.
pub async fn endpoint_not_found() -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Endpoint" })
}
