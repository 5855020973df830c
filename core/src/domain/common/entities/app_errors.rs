use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0} rate limit exceeded")]
    RateLimited(String),

    #[error("Internal server error")]
    InternalServerError,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// The generator answered with something that is not JSON at all.
    #[error("AI response is not valid JSON")]
    InvalidAiResponse,

    #[error("AI {operation} generation failed after {attempts} attempts: {last_error}")]
    GenerationExhausted {
        operation: String,
        attempts: u32,
        last_error: String,
    },
}
