/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tasklist_core::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Store error: {0}")]
    Core(CoreError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<CoreError> for ServerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { .. } => ServerError::NotFound(err.to_string()),
            CoreError::InvalidInput(msg) => ServerError::BadRequest(msg),
            other => ServerError::Core(other),
        }
    }
}

impl ServerError {
    /// Status code and client-facing message
    ///
    /// Internal failures are logged here and replaced with a generic message.
    fn status_and_message(self) -> (StatusCode, String) {
        match self {
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Core(ref e) => {
                tracing::error!("Store error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage error".to_string())
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Error rendered in the envelope style of the explicit handlers:
/// `{ "ok": false, "error": "..." }`
#[derive(Debug)]
pub struct EnvelopeError(pub ServerError);

impl From<ServerError> for EnvelopeError {
    fn from(err: ServerError) -> Self {
        EnvelopeError(err)
    }
}

impl From<CoreError> for EnvelopeError {
    fn from(err: CoreError) -> Self {
        EnvelopeError(err.into())
    }
}

impl IntoResponse for EnvelopeError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.0.status_and_message();

        let body = Json(json!({
            "ok": false,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_not_found_maps_to_404() {
        let err: ServerError = CoreError::not_found("Task", 999).into();
        assert_eq!(err.status_and_message().0, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_input_maps_to_400() {
        let err: ServerError = CoreError::InvalidInput("completed: expected bool".into()).into();
        assert_eq!(err.status_and_message().0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_serialization_failure_is_500() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ServerError = CoreError::from(source).into();
        assert_eq!(err.status_and_message().0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_details_are_hidden() {
        let err: ServerError = CoreError::storage("/secret/path is corrupt").into();
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Storage error");
    }
}
