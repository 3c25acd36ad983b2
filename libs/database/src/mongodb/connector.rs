use mongodb::{Client, Database, bson::doc, options::ClientOptions};
use tracing::{info, instrument};

use super::MongoConfig;
use super::config::DEFAULT_DATABASE;
use crate::error::{DatabaseError, DatabaseResult};
use crate::retry::{RetryConfig, retry_with_backoff};

/// Build a client from `config` and verify it with a `ping`.
///
/// ```ignore
/// use database::mongodb::{MongoConfig, connect};
///
/// let client = connect(&MongoConfig::new("mongodb://localhost:27017")).await?;
/// ```
#[instrument(skip_all, fields(url = %config.redacted_url()))]
pub async fn connect(config: &MongoConfig) -> DatabaseResult<Client> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(config.connect_timeout);
    options.server_selection_timeout = Some(config.server_selection_timeout);
    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!("Connected to MongoDB");
    Ok(client)
}

/// [`connect`] wrapped in exponential backoff, for startup while the database may still be
/// coming up.
pub async fn connect_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<Client> {
    retry_with_backoff(|| connect(config), retry_config.unwrap_or_default()).await
}

/// Pick the database: explicit name, then the URI's default database, then
/// [`DEFAULT_DATABASE`].
pub fn database(client: &Client, config: &MongoConfig) -> Database {
    match config.database.as_deref() {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_malformed_uri() {
        let result = connect(&MongoConfig::new("not-a-mongo-uri")).await;
        assert!(matches!(result, Err(DatabaseError::Mongo(_))));
    }

    #[tokio::test]
    async fn test_database_resolution_order() {
        // Client construction is lazy, no server needed.
        let with_path = MongoConfig::new("mongodb://localhost:27017/shop");
        let client = Client::with_uri_str(with_path.url()).await.unwrap();
        assert_eq!(database(&client, &with_path).name(), "shop");

        let explicit = with_path.clone().with_database("catalog");
        assert_eq!(database(&client, &explicit).name(), "catalog");

        let bare = MongoConfig::new("mongodb://localhost:27017");
        let client = Client::with_uri_str(bare.url()).await.unwrap();
        assert_eq!(database(&client, &bare).name(), DEFAULT_DATABASE);
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_connect() {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        assert!(connect(&MongoConfig::new(url)).await.is_ok());
    }
}
