//! Shared application state.

use mongodb::Client;

/// Cloned into the readiness handler and the shutdown cleanup; clones share the
/// client's connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    pub mongo_client: Client,
}
