use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Environment variable holding comma-separated allowed browser origins.
pub const CORS_ORIGIN_VAR: &str = "CORS_ALLOWED_ORIGIN";

/// Creates a CORS layer for the marketplace API.
///
/// Allows the given origins with the methods and headers the API uses
/// (`Content-Type` bodies and `Authorization` bearer tokens). Preflight
/// responses are cached for an hour.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Parse a comma-separated origin list, skipping blanks and invalid entries.
fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin, "Ignoring invalid CORS origin: {}", e);
                None
            }
        })
        .collect()
}

/// Build the CORS layer from [`CORS_ORIGIN_VAR`].
///
/// Unset or empty means same-origin only: no layer is returned.
pub fn cors_layer_from_env() -> Option<CorsLayer> {
    let raw = std::env::var(CORS_ORIGIN_VAR).ok()?;
    let origins = parse_origins(&raw);
    if origins.is_empty() {
        return None;
    }

    tracing::info!("CORS configured with allowed origins: {}", raw);
    Some(create_cors_layer(origins))
}
