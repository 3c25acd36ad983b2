//! Bearer-token authentication.
//!
//! This module provides:
//! - [`JwtConfig`] loaded from `JWT_SECRET` / `JWT_EXPIRES_IN_SECS`
//! - [`JwtAuth`] for issuing and verifying HS256 tokens
//! - [`jwt_auth_middleware`] for protected routes
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, jwt_auth_middleware};
//! use core_config::FromEnv;
//!
//! let auth = JwtAuth::new(&JwtConfig::from_env()?);
//!
//! let protected = Router::new()
//!     .route("/products", post(handler))
//!     .route_layer(axum::middleware::from_fn_with_state(auth, jwt_auth_middleware));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{JwtAuth, JwtClaims};
pub use middleware::{AUTH_FAILED_MESSAGE, jwt_auth_middleware};
