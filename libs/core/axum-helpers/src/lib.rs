//! # Axum Helpers
//!
//! Shared HTTP plumbing for the marketplace services.
//!
//! ## Modules
//!
//! - **[`auth`]**: stateless JWT issuing, verification and the bearer-token middleware
//! - **[`server`]**: router assembly, health checks, graceful shutdown
//! - **[`http`]**: CORS and security headers
//! - **[`errors`]**: `AppError` and the JSON error body
//! - **[`extractors`]**: `ValidatedJson`, `QueryParams`, `PathParam`
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router::<ApiDoc>(Router::new());
//!     create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{AUTH_FAILED_MESSAGE, JwtAuth, JwtClaims, JwtConfig, jwt_auth_middleware};

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

pub use http::{cors_layer_from_env, create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{PathParam, QueryParams, ValidatedJson};
