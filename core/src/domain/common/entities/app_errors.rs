use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Resource not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("A numeric user identity is required for this operation")]
    IdentityRequired,

    #[error("Database session unavailable: {0}")]
    SessionUnavailable(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
