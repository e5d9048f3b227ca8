//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use lumen_domain::error::{LumenError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Every failure a handler can produce, mapped to a status code.
#[derive(Debug)]
pub enum ApiError {
    /// Error raised by the application or domain layer.
    Domain(LumenError),
    /// The body could not be extracted as JSON.
    Rejected(JsonRejection),
    /// No route matched.
    NotFound,
}

impl From<LumenError> for ApiError {
    fn from(err: LumenError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(LumenError::Validation(err)) => {
                tracing::debug!(error = %err, "request rejected");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(LumenError::Internal(err)) => {
                tracing::error!(error = %err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::Rejected(rejection) => (rejection.status(), rejection.body_text()),
            Self::NotFound => (StatusCode::NOT_FOUND, "endpoint not found".to_string()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_domain::error::InternalError;

    #[test]
    fn should_map_validation_error_to_bad_request() {
        let response = ApiError::from(ValidationError::MissingHeartbeat).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_internal_error_to_server_error() {
        let err = LumenError::Internal(InternalError::LockPoisoned {
            resource: "liveness",
        });
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn should_map_not_found() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
