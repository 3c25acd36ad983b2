//! Readiness endpoint

use axum::{Router, extract::State, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

/// `GET /ready`: 200 once MongoDB answers a ping, 503 otherwise
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

async fn readiness_check(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "mongodb",
        Box::pin(async {
            database::mongodb::ping(&state.mongo_client)
                .await
                .map(|_| ())
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}
