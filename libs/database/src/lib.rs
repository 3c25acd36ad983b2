//! Database connectors shared by the API binaries.
//!
//! # Features
//!
//! - `mongodb` - MongoDB client setup, database selection and health probes
//! - `config` - `core_config::FromEnv` support for the connection settings
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::from_env()?;
//! let client = mongodb::connect_with_retry(&config, None).await?;
//! let db = mongodb::database(&client, &config);
//! ```

pub mod error;
pub mod retry;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use error::{DatabaseError, DatabaseResult};
pub use retry::{RetryConfig, retry_with_backoff};
