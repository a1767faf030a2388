//! Root-level health check.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match wayfarer_db::health_check(&state.pool).await {
        Ok(()) => "up",
        Err(e) => {
            tracing::error!(error = %e, "Database health check failed");
            "down"
        }
    };

    Json(HealthResponse {
        status: "ok",
        database,
    })
}
