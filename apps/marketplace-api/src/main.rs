use axum_helpers::JwtAuth;
use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{MongoProductRepository, ProductService};
use domain_users::{MongoUserRepository, UserService};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // A missing .env file is fine; the environment may already be populated.
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());

    let mongo_client = database::mongodb::connect_with_retry(&config.mongodb, None).await?;
    let db = database::mongodb::database(&mongo_client, &config.mongodb);

    info!("Successfully connected to MongoDB database: {}", db.name());

    let user_repository = MongoUserRepository::new(&db);
    user_repository.init_indexes().await?;
    let product_repository = MongoProductRepository::new(&db);
    product_repository.init_indexes().await?;

    let jwt_auth = JwtAuth::new(&config.jwt);

    let state = AppState {
        config,
        mongo_client,
    };

    let api_routes = api::routes(
        UserService::new(user_repository),
        ProductService::new(product_repository),
        jwt_auth,
    );

    let app = axum_helpers::create_router::<openapi::ApiDoc>(api_routes)
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.clone()));

    info!("Starting Marketplace API with graceful shutdown (30s timeout)");

    let mongo_client = state.mongo_client.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            mongo_client.shutdown().await;
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Marketplace API shutdown complete");
    Ok(())
}
