//! Users Domain
//!
//! Account registration and password login for the marketplace.
//!
//! # Features
//!
//! - Registration with unique user names
//! - Password hashing with Argon2id
//! - Login that issues a JWT through [`axum_helpers::JwtAuth`]
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, token issuing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Credential checks, password hashing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::{JwtAuth, JwtConfig};
//! use domain_users::{AuthState, InMemoryUserRepository, UserService, handlers};
//!
//! let service = UserService::new(InMemoryUserRepository::new());
//! let jwt_auth = JwtAuth::new(&JwtConfig::new("a-development-secret-of-32-chars!!"));
//!
//! let router = handlers::auth_router(AuthState::new(service, jwt_auth));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::{ApiDoc, AuthState, auth_router};
pub use models::{LoginRequest, MessageResponse, RegisterUser, TokenResponse, User};
pub use crate::mongodb::MongoUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
