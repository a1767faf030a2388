#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Rendered as `"{entity} not found"` at the HTTP boundary.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Internal(String),
}
