use axum_helpers::JwtConfig;
use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub jwt: JwtConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mut mongodb = MongoConfig::from_env()?;
        mongodb
            .app_name
            .get_or_insert_with(|| env!("CARGO_PKG_NAME").to_string());
        let jwt = JwtConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            jwt,
            server,
            environment,
        })
    }
}
