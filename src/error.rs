//! Request-level error taxonomy.
//!
//! Every variant maps to exactly one HTTP status and a human-readable
//! message; the mapping lives in `http::response`.

use thiserror::Error;

/// Errors that terminate a single request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Path identifier did not parse as an integer.
    #[error("Invalid ID. It must be a number.")]
    InvalidId,

    /// Body failed field-presence or range validation.
    #[error("{0}")]
    InvalidInput(&'static str),

    /// No product carries the requested id.
    #[error("Product not found")]
    NotFound,

    /// Body could not be read as the expected JSON object.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Body exceeded the configured size limit.
    #[error("Request body too large")]
    BodyTooLarge,

    /// No route matched the request path.
    #[error("Route not found")]
    RouteNotFound,

    /// A handler chain was assembled without a step its action relies on.
    #[error("Internal error: {0}")]
    Internal(&'static str),
}

pub type ApiResult<T> = Result<T, ApiError>;
