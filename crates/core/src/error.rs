#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} ({reference})")]
    NotFound {
        entity: &'static str,
        reference: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Upstream catalog source unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] with a display-able reference
    /// (numeric id or natural code).
    pub fn not_found(entity: &'static str, reference: impl std::fmt::Display) -> Self {
        CoreError::NotFound {
            entity,
            reference: reference.to_string(),
        }
    }
}
