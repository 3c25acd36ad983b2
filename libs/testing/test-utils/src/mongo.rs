//! MongoDB test infrastructure

use mongodb::{Client, Database};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;
use uuid::Uuid;

/// MongoDB container with a uniquely named database.
///
/// The container is stopped and removed when this value is dropped.
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    client: Client,
    database_name: String,
    pub connection_string: String,
}

impl TestMongo {
    /// Start a `mongo:8` container and connect to it.
    pub async fn new() -> Self {
        let container = Mongo::default()
            .with_tag("8")
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let connection_string = format!("mongodb://127.0.0.1:{}", host_port);
        let client = Client::with_uri_str(&connection_string)
            .await
            .expect("Failed to create MongoDB client");

        let database_name = format!("test_{}", Uuid::now_v7().simple());
        tracing::info!(port = host_port, database = %database_name, "Test MongoDB ready");

        Self {
            container,
            client,
            database_name,
            connection_string,
        }
    }

    pub fn client(&self) -> Client {
        self.client.clone()
    }

    /// The database reserved for this instance
    pub fn database(&self) -> Database {
        self.client.database(&self.database_name)
    }
}

impl Drop for TestMongo {
    fn drop(&mut self) {
        tracing::debug!(database = %self.database_name, "Cleaning up test MongoDB container");
    }
}
