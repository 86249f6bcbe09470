//! Response rendering.
//!
//! # Responsibilities
//! - Render terminal action outcomes as status + JSON body
//! - Map every `ApiError` to its status and a `{"message": ...}` body
//! - Fold body-parsing rejections into the same error shape
//! - Rewrite plain-text errors from axum and tower-http (405, 408, 413)
//!   into the same shape
//!
//! # Design Decisions
//! - Error bodies carry only a human-readable message, no error code
//! - 204 responses have an empty body

use axum::{
    body::Body,
    extract::rejection::JsonRejection,
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::actions::ActionOutcome;
use crate::error::ApiError;

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidInput(_) | ApiError::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::BodyTooLarge
        } else {
            ApiError::MalformedBody(rejection.body_text())
        }
    }
}

impl IntoResponse for ActionOutcome {
    fn into_response(self) -> Response {
        match self {
            ActionOutcome::Created(product) => (StatusCode::CREATED, Json(product)).into_response(),
            ActionOutcome::Listed(products) => (StatusCode::OK, Json(products)).into_response(),
            ActionOutcome::Found(product) => (StatusCode::OK, Json(product)).into_response(),
            ActionOutcome::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Replace any non-JSON error body with `{"message": <reason phrase>}`.
///
/// Status and the remaining headers (`allow`, `x-request-id`) are kept.
pub async fn ensure_json_errors(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .is_some_and(|v| v.as_bytes().starts_with(b"application/json"));
    if is_json {
        return response;
    }

    let body = ErrorBody {
        message: status.canonical_reason().unwrap_or("Request failed").to_string(),
    };
    let bytes = match serde_json::to_vec(&body) {
        Ok(bytes) => bytes,
        Err(_) => return response,
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Response::from_parts(parts, Body::from(bytes))
}
