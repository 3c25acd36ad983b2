//! Query string and path extractors that reject with [`AppError`].

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// [`Query`] whose rejection is the JSON error body instead of plain text.
///
/// # Example
/// ```ignore
/// async fn list(QueryParams(filter): QueryParams<ProductFilter>) -> Json<ProductList> {
///     // ...
/// }
/// ```
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(QueryParams(value))
    }
}

/// [`Path`] whose rejection is the JSON error body instead of plain text.
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(PathParam(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorResponse;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Filter {
        search: Option<String>,
    }

    async fn search(QueryParams(filter): QueryParams<Filter>) -> String {
        filter.search.unwrap_or_default()
    }

    async fn echo(PathParam(id): PathParam<String>) -> String {
        id
    }

    fn app() -> Router {
        Router::new()
            .route("/items", get(search))
            .route("/{id}", get(echo))
    }

    async fn send(uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_query_params_ok() {
        let (status, _, body) = send("/items?search=lamp").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"lamp");
    }

    #[tokio::test]
    async fn test_duplicate_query_field_is_json_400() {
        let (status, content_type, body) = send("/items?search=a&search=b").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.error, "INVALID_PARAMETERS");
        assert_eq!(body.code, 1002);
    }

    #[tokio::test]
    async fn test_path_param_ok() {
        let (status, _, body) = send("/abc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"abc");
    }

    #[tokio::test]
    async fn test_invalid_utf8_path_is_json_400() {
        let (status, content_type, body) = send("/%FF").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.error, "INVALID_PARAMETERS");
    }
}
