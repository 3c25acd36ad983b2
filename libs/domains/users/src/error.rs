use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use thiserror::Error;

pub const MISSING_CREDENTIALS: &str = "Username and password are required.";
pub const DUPLICATE_USER_NAME: &str = "Username already exists.";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";

#[derive(Debug, Error)]
pub enum UserError {
    #[error("{MISSING_CREDENTIALS}")]
    MissingCredentials,

    #[error("User name '{0}' already exists")]
    DuplicateUserName(String),

    #[error("{INVALID_CREDENTIALS}")]
    InvalidCredentials,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    /// Map to the HTTP error, answering internal failures with `internal_message`.
    ///
    /// The cause of an internal failure is logged here and never sent to the client.
    pub fn into_app_error(self, internal_message: &str) -> AppError {
        match self {
            UserError::MissingCredentials => AppError::BadRequest(MISSING_CREDENTIALS.to_string()),
            UserError::DuplicateUserName(_) => {
                AppError::BadRequest(DUPLICATE_USER_NAME.to_string())
            }
            UserError::InvalidCredentials => {
                AppError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            UserError::PasswordHash(cause)
            | UserError::Database(cause)
            | UserError::Internal(cause) => {
                tracing::error!(error = %cause, "{}", internal_message);
                AppError::InternalServerError(internal_message.to_string())
            }
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        err.into_app_error(ErrorCode::InternalError.default_message())
    }
}

impl From<mongodb::error::Error> for UserError {
    fn from(err: mongodb::error::Error) -> Self {
        UserError::Database(err.to_string())
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
