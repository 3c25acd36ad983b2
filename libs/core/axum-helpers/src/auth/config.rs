//! JWT settings loaded through `core_config::FromEnv`.

use core_config::{ConfigError, FromEnv, env_parse_or_default, env_required};
use std::time::Duration;

pub const MIN_SECRET_LEN: usize = 32;
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required, at least 32 characters)
/// - `JWT_EXPIRES_IN_SECS` (optional, default 3600)
///
/// ```ignore
/// use axum_helpers::JwtConfig;
/// use core_config::FromEnv;
///
/// let config = JwtConfig::from_env()?;
/// let config = JwtConfig::new("my-super-secret-key-that-is-at-least-32-chars");
/// ```
#[derive(Clone)]
pub struct JwtConfig {
    /// HS256 signing secret
    pub secret: String,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
}

impl JwtConfig {
    /// # Panics
    /// Panics if the secret is shorter than 32 characters.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= MIN_SECRET_LEN,
            "JWT secret must be at least 32 characters"
        );
        Self {
            secret,
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_SECS),
        }
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;

        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least 32 characters for security (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        let ttl_secs = env_parse_or_default("JWT_EXPIRES_IN_SECS", DEFAULT_TOKEN_TTL_SECS)?;
        if ttl_secs == 0 {
            return Err(ConfigError::ParseError {
                key: "JWT_EXPIRES_IN_SECS".to_string(),
                details: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            secret,
            token_ttl: Duration::from_secs(ttl_secs),
        })
    }
}
