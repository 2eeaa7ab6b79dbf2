//! The single place where failures become HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domains::DomainError;
use tracing::error;

use crate::dto::ErrorResponse;

const INVALID_BODY: &str = "Invalid request body";
const BODY_TOO_LARGE: &str = "Request body too large";
const INTERNAL: &str = "Internal server error";

#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    /// Body exceeded the configured `DefaultBodyLimit`
    PayloadTooLarge,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

// Bodies that are not JSON objects of the expected shape are validation
// failures, not axum's default 415/422. Oversized bodies keep their 413.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(%rejection, "rejected request body");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge
        } else {
            Self::Domain(DomainError::validation(INVALID_BODY))
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::PayloadTooLarge => {
                (StatusCode::PAYLOAD_TOO_LARGE, BODY_TOO_LARGE.to_string())
            }
            ApiError::Domain(DomainError::Internal(err)) => {
                error!(error = ?err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL.to_string())
            }
            ApiError::Domain(err) => {
                let status = match &err {
                    DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
                    DomainError::NotFound(_) => StatusCode::NOT_FOUND,
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, err.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
