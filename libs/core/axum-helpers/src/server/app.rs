use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{not_found, panic_response};
use crate::http::{cors_layer_from_env, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

/// Combines the API routes with documentation and cross-cutting middleware.
///
/// This function sets up:
/// - OpenAPI documentation (Swagger UI, ReDoc, RapiDoc, Scalar) and
///   `/api-docs/openapi.json`
/// - API routes merged at the root
/// - Request tracing, security headers and response compression
/// - A JSON 404 fallback and a JSON 500 for handler panics
/// - CORS, only when `CORS_ALLOWED_ORIGIN` is set
///
/// Health endpoints are merged separately with [`health_router`](super::health_router).
///
/// # Example
/// ```ignore
/// use axum_helpers::server::create_router;
///
/// let api_routes = Router::new()
///     .route("/products", get(handler))
///     .with_state(my_state);
///
/// let router = create_router::<ApiDoc>(api_routes);
/// ```
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    let router = match cors_layer_from_env() {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.layer(CompressionLayer::new())
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup`.
///
/// In-flight requests are drained before `cleanup` starts; `cleanup` gets at
/// most `shutdown_timeout` to finish.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     mongo_client.shutdown().await;
/// };
///
/// create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let (coordinator, _rx) = ShutdownCoordinator::new();
    let signal_handle = coordinator.clone();
    tokio::spawn(async move { signal_handle.wait_for_signal().await });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait_for_shutdown().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => tracing::warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}
