#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_parse_or_default, env_required_any};
use std::time::Duration;

/// Database used when neither `MONGODB_DATABASE` nor the URI path names one
pub const DEFAULT_DATABASE: &str = "marketplace";

/// Connection URI variables, in lookup order
pub const URI_VARS: [&str; 3] = ["PRODUCT_DB_URI", "MONGODB_URL", "MONGO_URL"];

/// MongoDB connection settings
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::new("mongodb://localhost:27017/shop").with_app_name("marketplace-api");
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// `mongodb://[user:pass@]host[:port][/database][?options]`
    pub url: String,
    /// Explicit database name. `None` defers to the URI path, then [`DEFAULT_DATABASE`].
    pub database: Option<String>,
    pub app_name: Option<String>,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
}

impl MongoConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: None,
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 0,
            connect_timeout: Duration::from_secs(10),
            server_selection_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Connection string with the password replaced, safe to log
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };
        match rest.split_once('@') {
            Some((credentials, host)) => {
                let user = credentials.split(':').next().unwrap_or_default();
                format!("{scheme}://{user}:***@{host}")
            }
            None => self.url.clone(),
        }
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::new("mongodb://localhost:27017")
    }
}

/// Environment variables:
/// - `PRODUCT_DB_URI`, `MONGODB_URL` or `MONGO_URL` (required, first one set wins)
/// - `MONGODB_DATABASE` (optional)
/// - `MONGODB_APP_NAME` (optional)
/// - `MONGODB_MAX_POOL_SIZE` / `MONGODB_MIN_POOL_SIZE` (default 100 / 0)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` / `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default 10 / 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_required_any(&URI_VARS)?;
        let defaults = Self::new(url);

        let database = std::env::var("MONGODB_DATABASE")
            .ok()
            .filter(|name| !name.trim().is_empty());
        let app_name = std::env::var("MONGODB_APP_NAME").ok();

        let connect_timeout_secs = env_parse_or_default(
            "MONGODB_CONNECT_TIMEOUT_SECS",
            defaults.connect_timeout.as_secs(),
        )?;
        let server_selection_timeout_secs = env_parse_or_default(
            "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
            defaults.server_selection_timeout.as_secs(),
        )?;

        Ok(Self {
            database,
            app_name,
            max_pool_size: env_parse_or_default("MONGODB_MAX_POOL_SIZE", defaults.max_pool_size)?,
            min_pool_size: env_parse_or_default("MONGODB_MIN_POOL_SIZE", defaults.min_pool_size)?,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            server_selection_timeout: Duration::from_secs(server_selection_timeout_secs),
            ..defaults
        })
    }
}
