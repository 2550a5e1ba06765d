use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::domain::DomainError;

const INTERNAL_ERROR_DETAIL: &str = "An unexpected error occurred.";

/// Everything a handler can fail with. This is the only place errors become
/// status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The request could not be parsed (bad JSON, query string, or path).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Problem-details style error body.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    pub title: String,
    pub status: u16,
    pub detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Domain(e) => match e {
                DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                DomainError::AlreadyExists(_) => StatusCode::CONFLICT,
                DomainError::NotFound(_) => StatusCode::NOT_FOUND,
                DomainError::StorageError(_)
                | DomainError::Cancelled
                | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Domain(e) if self.status().is_server_error() => {
                if e.is_cancelled() {
                    debug!("Request cancelled before completion");
                } else {
                    error!("Unhandled error: {}", e);
                }
                INTERNAL_ERROR_DETAIL.to_string()
            }
            ApiError::Domain(e) => e.message().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ProblemDetails {
            title: status.canonical_reason().unwrap_or("Error").to_string(),
            status: status.as_u16(),
            detail: self.detail(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_status_codes() {
        let cases = [
            (DomainError::invalid_input("x"), StatusCode::BAD_REQUEST),
            (DomainError::already_exists("x"), StatusCode::CONFLICT),
            (DomainError::not_found("x"), StatusCode::NOT_FOUND),
            (DomainError::storage("x"), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::internal("x"), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::Cancelled, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(ApiError::from(error).status(), expected);
        }
    }

    #[test]
    fn test_internal_details_are_not_leaked() {
        let err = ApiError::from(DomainError::storage("disk on fire at /var/lib/db"));
        assert_eq!(err.detail(), INTERNAL_ERROR_DETAIL);
    }

    #[test]
    fn test_client_errors_carry_the_message() {
        let err = ApiError::from(DomainError::not_found("Dog with Id 3 not found."));
        assert_eq!(err.detail(), "Dog with Id 3 not found.");

        let err = ApiError::BadRequest("expected a number".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.detail(), "expected a number");
    }
}
