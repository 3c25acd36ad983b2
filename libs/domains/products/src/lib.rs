//! Products Domain
//!
//! Product listings for the marketplace: create, search and delete.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, JWT gate on writes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, id parsing
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
//! use domain_products::{
//!     handlers,
//!     mongodb::MongoProductRepository,
//!     service::ProductService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("marketplace");
//!
//! let repository = MongoProductRepository::new(&db);
//! repository.init_indexes().await?;
//! let service = ProductService::new(repository);
//!
//! let jwt_auth = JwtAuth::new(&JwtConfig::new("a-development-secret-of-32-chars!!"));
//! let router = handlers::router(service, jwt_auth);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, Product, ProductCreated, ProductFilter, ProductList};
pub use crate::mongodb::MongoProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
