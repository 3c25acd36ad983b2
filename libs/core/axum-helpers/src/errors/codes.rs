//! Error codes carried in every error body.
//!
//! Each code has a string form for clients, a number for dashboards and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.code(), 1004);
//! ```

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000s)
    /// A required field is missing or a value is out of range
    ValidationError,
    /// A path segment or query string could not be decoded
    InvalidParameters,
    /// The body is not valid JSON or has the wrong shape
    InvalidJson,
    NotFound,
    /// Credentials or bearer token missing, invalid or expired
    Unauthorized,

    // Server errors
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidParameters => 1002,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::Unauthorized => 1006,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed.",
            Self::InvalidParameters => "Invalid request parameters.",
            Self::InvalidJson => "Invalid JSON format.",
            Self::NotFound => "The requested resource was not found.",
            Self::Unauthorized => "Authentication failed.",
            Self::InternalError => "Internal server error.",
        }
    }
}
