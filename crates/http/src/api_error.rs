//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body:
//! `{"error": "message"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use state_inspector_core::InspectorError;
use state_inspector_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// `Internal` variant logs the real error server-side and returns
/// a static message to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input or missing configuration.
    BadRequest(String),
    /// 404 Not Found: database file, key or directory does not exist.
    NotFound(String),
    /// 503 Service Unavailable: the database is locked by the editor.
    ServiceUnavailable(String),
    /// 500 Internal Server Error: unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<InspectorError> for ApiError {
    fn from(err: InspectorError) -> Self {
        match err {
            InspectorError::Configuration(msg) => Self::BadRequest(msg),
            InspectorError::InvalidWorkspaceId(_) => Self::BadRequest(err.to_string()),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotConfigured(msg) | ServiceError::InvalidInput(msg) => {
                Self::BadRequest(msg)
            },
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            ServiceError::Storage(ref e) if e.is_not_found() => Self::NotFound(e.to_string()),
            ServiceError::Storage(ref e) if e.is_busy() => {
                Self::ServiceUnavailable(format!("{e}; retry once the editor releases it"))
            },
            _ => Self::Internal(err.into()),
        }
    }
}
