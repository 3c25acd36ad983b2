use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use thiserror::Error;

pub const MISSING_FIELDS: &str = "Name and price are required.";
pub const INVALID_PRICE: &str = "Price must be a non-negative number.";
pub const NOT_FOUND: &str = "Product not found.";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// Map to the HTTP error, answering internal failures with `internal_message`.
    pub fn into_app_error(self, internal_message: &str) -> AppError {
        match self {
            ProductError::NotFound(_) => AppError::NotFound(NOT_FOUND.to_string()),
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Database(cause) | ProductError::Internal(cause) => {
                tracing::error!(error = %cause, "{}", internal_message);
                AppError::InternalServerError(internal_message.to_string())
            }
        }
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        err.into_app_error(ErrorCode::InternalError.default_message())
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_has_fixed_message() {
        let err = ProductError::NotFound("abc".into()).into_app_error("ignored");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(matches!(err, AppError::NotFound(ref m) if m == NOT_FOUND));
    }

    #[test]
    fn test_database_error_hides_cause() {
        let err = ProductError::Database("socket closed".into())
            .into_app_error("Failed to fetch products.");
        assert!(matches!(err, AppError::InternalServerError(ref m) if m == "Failed to fetch products."));
    }
}
