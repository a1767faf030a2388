//! Route definitions for authentication.
//!
//! ```text
//! GET  /check   -> check
//! POST /login   -> login
//! POST /logout  -> logout
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/check", get(auth::check))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}
