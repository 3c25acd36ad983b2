//! MongoDB connection setup, health probing and write-error helpers

mod config;
mod connector;
mod health;
mod write;

pub use config::{DEFAULT_DATABASE, MongoConfig, URI_VARS};
pub use connector::{connect, connect_with_retry, database};
pub use health::ping;
pub use write::{DUPLICATE_KEY_CODE, is_duplicate_key};

pub use mongodb::{Client, Collection, Database};
