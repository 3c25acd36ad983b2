use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{UserError, UserResult};

/// Registered account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier (UUIDv7, time ordered)
    pub id: Uuid,
    /// Login name, unique across users
    pub user_name: String,
    /// Argon2id PHC string (never exposed in API responses)
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user (password must already be hashed)
    pub fn new(user_name: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_name: user_name.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}

/// Body of `POST /register`
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct RegisterUser {
    #[validate(
        required(message = "Username and password are required."),
        length(min = 1, message = "Username and password are required.")
    )]
    #[schema(example = "alice")]
    pub user_name: Option<String>,
    #[validate(
        required(message = "Username and password are required."),
        length(min = 1, message = "Username and password are required.")
    )]
    #[schema(example = "s3cret-passw0rd")]
    pub password: Option<String>,
}

/// Body of `POST /login`
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(
        required(message = "Username and password are required."),
        length(min = 1, message = "Username and password are required.")
    )]
    #[schema(example = "alice")]
    pub user_name: Option<String>,
    #[validate(
        required(message = "Username and password are required."),
        length(min = 1, message = "Username and password are required.")
    )]
    #[schema(example = "s3cret-passw0rd")]
    pub password: Option<String>,
}

/// Borrow both fields, or fail when either is absent or empty.
fn credentials<'a>(
    user_name: &'a Option<String>,
    password: &'a Option<String>,
) -> UserResult<(&'a str, &'a str)> {
    match (user_name.as_deref(), password.as_deref()) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Ok((u, p)),
        _ => Err(UserError::MissingCredentials),
    }
}

impl RegisterUser {
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: Some(user_name.into()),
            password: Some(password.into()),
        }
    }

    pub fn credentials(&self) -> UserResult<(&str, &str)> {
        credentials(&self.user_name, &self.password)
    }
}

impl LoginRequest {
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: Some(user_name.into()),
            password: Some(password.into()),
        }
    }

    pub fn credentials(&self) -> UserResult<(&str, &str)> {
        credentials(&self.user_name, &self.password)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Registration successful.")]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Bearer token for the protected product routes
    pub token: String,
}
