use std::sync::Arc;

use wayfarer_media::MediaStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, constructed once in `main` and injected here.
    pub pool: wayfarer_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Image host client (real, mock, or a test fake).
    pub media: Arc<dyn MediaStore>,
}
