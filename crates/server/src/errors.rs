use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::{ServiceError, StoreError};

/// `{error, message}` body with an HTTP status.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self { status, error: error.into(), message: message.into() }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "unauthorized", message)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.error, "message": self.message}))).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation { kind, message } => {
                JsonApiError::new(StatusCode::UNPROCESSABLE_ENTITY, kind.code(), message)
            }
            ServiceError::Store(store) => {
                // detail stays in the logs
                error!(err = %store, "record store failure");
                let status = match store {
                    StoreError::Timeout(_) | StoreError::Unavailable(_) => StatusCode::BAD_GATEWAY,
                    StoreError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                JsonApiError::new(status, "store_error", "the record store could not complete the request; try again later")
            }
        }
    }
}
