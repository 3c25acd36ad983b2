use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,       // Subject (user ID)
    pub user_name: String, // Login name at issue time
    pub exp: i64,          // Expiration time
    pub iat: i64,          // Issued at
    pub jti: String,       // JWT ID
}

/// Stateless HS256 token issuer and verifier.
///
/// A token is accepted when its signature matches the configured secret and it
/// has not expired. There is no server-side revocation.
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
    token_ttl: Duration,
}

impl JwtAuth {
    /// # Example
    /// ```ignore
    /// use axum_helpers::{JwtAuth, JwtConfig};
    /// use core_config::FromEnv;
    ///
    /// let config = JwtConfig::from_env()?;
    /// let jwt_auth = JwtAuth::new(&config);
    /// ```
    pub fn new(config: &JwtConfig) -> Self {
        let token_ttl =
            Duration::from_std(config.token_ttl).unwrap_or_else(|_| Duration::seconds(3600));

        tracing::info!(ttl_secs = token_ttl.num_seconds(), "JWT auth initialized");
        Self {
            secret: config.secret.clone(),
            token_ttl,
        }
    }

    /// Issue a token for a user, valid for the configured TTL.
    pub fn create_token(&self, user_id: &str, user_name: &str) -> eyre::Result<String> {
        self.create_token_with_ttl(user_id, user_name, self.token_ttl)
    }

    pub(crate) fn create_token_with_ttl(
        &self,
        user_id: &str,
        user_name: &str,
        ttl: Duration,
    ) -> eyre::Result<String> {
        let now = Utc::now();

        let claims = JwtClaims {
            sub: user_id.to_string(),
            user_name: user_name.to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let header = Header {
            alg: Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify JWT token signature and expiry, then decode claims
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let token_data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )?;

        Ok(token_data.claims)
    }
}
