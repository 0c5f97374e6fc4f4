//! API error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors a handler can surface to the client.
///
/// Serialized as `{ "message": … }`, the shape the mobile client
/// expects; no structured error codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request was malformed (missing or invalid parameter).
    #[error("{0}")]
    BadRequest(String),
    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

/// Reject a missing or blank required query parameter.
pub(crate) fn require_param<'a>(value: &'a str, name: &str) -> Result<&'a str, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "missing required parameter: {name}"
        )));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_parameter_is_rejected() {
        let err = require_param("   ", "query").expect_err("blank must fail");
        assert_eq!(
            err,
            ApiError::BadRequest("missing required parameter: query".to_owned())
        );
    }

    #[test]
    fn present_parameter_is_trimmed() {
        assert_eq!(require_param(" taj mahal ", "query"), Ok("taj mahal"));
    }
}
