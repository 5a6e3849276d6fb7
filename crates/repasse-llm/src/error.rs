//! Client error types for repasse-llm.
//!
//! All client operations return [`Result<T>`] which uses [`ClientError`]
//! as the error type.

use thiserror::Error;

/// Errors that can occur when submitting a request to an inference endpoint.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The client has no usable credential (e.g. empty API key).
    #[error("client not configured: {0}")]
    NotConfigured(String),

    /// Authentication with the endpoint was rejected (HTTP 401/403).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The endpoint returned a rate-limit response (HTTP 429).
    #[error("rate limited: retry after {retry_after_ms}ms")]
    RateLimited {
        /// Suggested wait time before retrying, in milliseconds.
        retry_after_ms: u64,
    },

    /// The requested model does not exist on the endpoint.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The HTTP request failed for any other reason.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The endpoint returned a response that could not be parsed.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The parsed response does not conform to the requested schema.
    #[error("schema violation: {0}")]
    SchemaViolation(String),

    /// The request timed out.
    #[error("timeout")]
    Timeout,

    /// An HTTP-level error from reqwest.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenience type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
