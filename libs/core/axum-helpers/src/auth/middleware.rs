use super::jwt::JwtAuth;
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

pub const AUTH_FAILED_MESSAGE: &str = "Authentication failed.";

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The scheme name matches case-insensitively.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
}

/// JWT authentication middleware
///
/// Validates the bearer token and inserts [`JwtClaims`](super::JwtClaims) into
/// request extensions on success. Missing, malformed, forged and expired tokens
/// all get the same 401 body.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::{JwtAuth, jwt_auth_middleware};
///
/// let protected_routes = Router::new()
///     .route("/products", post(create_product))
///     .route_layer(axum::middleware::from_fn_with_state(
///         jwt_auth.clone(),
///         jwt_auth_middleware,
///     ));
/// ```
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = extract_bearer_token(&headers) else {
        tracing::debug!("No bearer token in Authorization header");
        return Err(AppError::Unauthorized(AUTH_FAILED_MESSAGE.to_string()));
    };

    let claims = auth.verify_token(token).map_err(|e| {
        tracing::debug!("JWT verification failed: {}", e);
        AppError::Unauthorized(AUTH_FAILED_MESSAGE.to_string())
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
