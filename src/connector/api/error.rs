use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::domain::DomainError;

/// Maps domain errors onto HTTP responses.
///
/// Invalid input surfaces its message to the caller with a 400; every other
/// failure returns a generic 500 body, with the detail going to logs only.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            DomainError::InvalidInput(message) => {
                error!("Rejected request: {}", message);
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            err => {
                error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
