use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use tracing::debug;
use utoipa::ToSchema;

/// Name of the JSON field that carries an error's text.
///
/// Users and transactions answer with `{"error": ...}` while categories answer
/// with `{"message": ...}`. Existing clients depend on both shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKey {
    Error,
    Message,
}

#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    BadRequest { key: ErrorKey, message: String },
    NotFound { key: ErrorKey, message: String },
}

impl AppError {
    pub fn bad_request(key: ErrorKey, message: impl Into<String>) -> Self {
        AppError::BadRequest {
            key,
            message: message.into(),
        }
    }

    pub fn not_found(key: ErrorKey, message: impl Into<String>) -> Self {
        AppError::NotFound {
            key,
            message: message.into(),
        }
    }

    pub fn missing_fields(key: ErrorKey) -> Self {
        Self::bad_request(key, "Missing required fields")
    }

    pub fn invalid_body(key: ErrorKey) -> Self {
        Self::bad_request(key, "Invalid request body")
    }

    fn parts(&self) -> (ErrorKey, &str) {
        match self {
            AppError::BadRequest { key, message } | AppError::NotFound { key, message } => {
                (*key, message.as_str())
            }
        }
    }
}

/// Error body used by the user and transaction resources
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "User not found")]
    pub error: String,
}

/// Plain message body: category errors and every delete confirmation
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Category deleted")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest { message, .. } => write!(f, "Bad request: {message}"),
            AppError::NotFound { message, .. } => write!(f, "Not found: {message}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        debug!("{self}");

        let (key, message) = self.parts();
        let mut response = HttpResponse::build(self.status_code());
        match key {
            ErrorKey::Error => response.json(ErrorResponse {
                error: message.to_string(),
            }),
            ErrorKey::Message => response.json(MessageResponse::new(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.expect("Should read body");
        (status, serde_json::from_slice(&bytes).expect("Should be JSON"))
    }

    #[actix_rt::test]
    async fn test_error_key_renders_error_field() {
        let (status, body) =
            body_of(AppError::not_found(ErrorKey::Error, "User not found")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "error": "User not found" }));
    }

    #[actix_rt::test]
    async fn test_message_key_renders_message_field() {
        let (status, body) = body_of(AppError::missing_fields(ErrorKey::Message)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({ "message": "Missing required fields" })
        );
    }
}
