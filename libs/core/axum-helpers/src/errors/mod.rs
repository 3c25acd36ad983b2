pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Product not found."
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Numeric code for logging and monitoring
    pub code: i32,
    /// Machine-readable identifier, see [`ErrorCode`]
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Field-level details for validation failures
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain errors convert into this type, so every crate answers with the same
/// [`ErrorResponse`] shape. The `String` payloads are the client-facing messages.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query string rejection: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Path parameter rejection: {0}")]
    PathExtractorRejection(#[from] PathRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(_)
            | AppError::QueryExtractorRejection(_)
            | AppError::PathExtractorRejection(_)
            | AppError::ValidationError(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// First custom message among the failed rules, checked in field-name order.
///
/// Models attach the client-facing text to their `#[validate(...)]` rules, so the
/// response can say "Name and price are required." instead of a generic line.
pub fn first_validation_message(errors: &ValidationErrors) -> Option<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (code, message, details) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidJson.code(),
                    "JSON extraction error: {}",
                    e.body_text()
                );
                (ErrorCode::InvalidJson, e.body_text(), None)
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidParameters.code(),
                    "Query string rejection: {}",
                    e.body_text()
                );
                (ErrorCode::InvalidParameters, e.body_text(), None)
            }
            AppError::PathExtractorRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidParameters.code(),
                    "Path parameter rejection: {}",
                    e.body_text()
                );
                (ErrorCode::InvalidParameters, e.body_text(), None)
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {}",
                    e
                );
                let message = first_validation_message(&e)
                    .unwrap_or_else(|| ErrorCode::ValidationError.default_message().to_string());
                let details = serde_json::to_value(&e).ok();
                (ErrorCode::ValidationError, message, details)
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (ErrorCode::ValidationError, msg, None)
            }
            AppError::Unauthorized(msg) => {
                tracing::info!("Unauthorized: {}", msg);
                (ErrorCode::Unauthorized, msg, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (ErrorCode::NotFound, msg, None)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (ErrorCode::InternalError, msg, None)
            }
        };

        let body = ErrorResponse {
            details,
            ..ErrorResponse::new(code, message)
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use validator::Validate;

    #[derive(Validate)]
    struct Listing {
        #[validate(required(message = "Name and price are required."))]
        name: Option<String>,
        #[validate(range(min = 0.0, message = "Price must be a non-negative number."))]
        price: Option<f64>,
    }

    async fn body_of(err: AppError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, body) = body_of(AppError::NotFound("Product not found.".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, 1004);
        assert_eq!(body.error, "NOT_FOUND");
        assert_eq!(body.message, "Product not found.");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn test_unauthorized_body() {
        let (status, body) = body_of(AppError::Unauthorized("Authentication failed.".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_validation_error_uses_custom_message() {
        let listing = Listing {
            name: None,
            price: Some(-1.0),
        };
        let errors = listing.validate().unwrap_err();

        let (status, body) = body_of(AppError::from(errors)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "Name and price are required.");
        assert!(body.details.is_some());
    }

    #[test]
    fn test_first_validation_message_single_field() {
        let listing = Listing {
            name: Some("lamp".into()),
            price: Some(-5.0),
        };
        let errors = listing.validate().unwrap_err();
        assert_eq!(
            first_validation_message(&errors).as_deref(),
            Some("Price must be a non-negative number.")
        );
    }

    #[test]
    fn test_internal_error_status() {
        let err = AppError::InternalServerError("Login failed.".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
