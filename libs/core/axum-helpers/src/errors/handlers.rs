use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;

use super::{ErrorCode, ErrorResponse};

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new(
        ErrorCode::NotFound,
        ErrorCode::NotFound.default_message(),
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}

/// Turns a handler panic into the generic 500 body.
///
/// Plug into `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");

    let body = Json(ErrorResponse::new(
        ErrorCode::InternalError,
        ErrorCode::InternalError.default_message(),
    ));

    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_status() {
        assert_eq!(not_found().await.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_panic_response_status() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
