// Maps domain failures onto HTTP responses.
//
// Purpose
// - Let handlers bubble `DomainError` with `?` and still answer with the
//   right status code and a JSON message body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::shared::core::errors::DomainError;

pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::Validation(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            DomainError::Conflict(_) => (StatusCode::CONFLICT, self.0.to_string()),
            DomainError::Authentication => (StatusCode::UNAUTHORIZED, self.0.to_string()),
            DomainError::Storage(source) => {
                tracing::error!(error = %source, "request failed on storage");
                // Backend details stay out of the response body.
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}
