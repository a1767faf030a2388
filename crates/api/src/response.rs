//! Shared response types for API handlers.

use serde::Serialize;

/// Plain `{ "message": "..." }` acknowledgement used by mutations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
