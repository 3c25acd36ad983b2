//! Handler tests for the users domain
//!
//! Drive `auth_router` over the in-memory repository and check:
//! - status codes
//! - error bodies and their messages
//! - the issued token

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{ErrorResponse, JwtAuth, JwtConfig};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::TestDataBuilder;
use tower::ServiceExt; // For oneshot()

const SECRET: &str = "handler-test-secret-with-at-least-32-chars";

fn jwt_auth() -> JwtAuth {
    JwtAuth::new(&JwtConfig::new(SECRET))
}

fn app() -> Router {
    let service = UserService::new(InMemoryUserRepository::new());
    auth_router(AuthState::new(service, jwt_auth()))
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_register_returns_201() {
    let builder = TestDataBuilder::from_test_name("register_201");

    let response = app()
        .oneshot(post_json(
            "/register",
            json!({"user_name": builder.user_name("buyer"), "password": "pw"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: MessageResponse = json_body(response.into_body()).await;
    assert_eq!(body.message, "Registration successful.");
}

#[tokio::test]
async fn test_register_missing_field_returns_400() {
    for payload in [
        json!({}),
        json!({"user_name": "alice"}),
        json!({"password": "pw"}),
        json!({"user_name": "", "password": "pw"}),
    ] {
        let response = app().oneshot(post_json("/register", payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(body.message, "Username and password are required.");
    }
}

#[tokio::test]
async fn test_register_duplicate_returns_400() {
    let app = app();
    let payload = json!({"user_name": "alice", "password": "pw"});

    let first = app
        .clone()
        .oneshot(post_json("/register", payload.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.oneshot(post_json("/register", payload)).await.unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = json_body(second.into_body()).await;
    assert_eq!(body.message, "Username already exists.");
}

#[tokio::test]
async fn test_register_malformed_json_returns_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/register")
        .header("content-type", "application/json")
        .body(Body::from("{\"user_name\": "))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_returns_verifiable_token() {
    let app = app();
    app.clone()
        .oneshot(post_json(
            "/register",
            json!({"user_name": "alice", "password": "s3cret"}),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(post_json(
            "/login",
            json!({"user_name": "alice", "password": "s3cret"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: TokenResponse = json_body(response.into_body()).await;

    let claims = jwt_auth().verify_token(&body.token).unwrap();
    assert_eq!(claims.user_name, "alice");
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn test_login_bad_credentials_return_401() {
    let app = app();
    app.clone()
        .oneshot(post_json(
            "/register",
            json!({"user_name": "alice", "password": "s3cret"}),
        ))
        .await
        .unwrap();

    for payload in [
        json!({"user_name": "alice", "password": "wrong"}),
        json!({"user_name": "nobody", "password": "s3cret"}),
    ] {
        let response = app.clone().oneshot(post_json("/login", payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(body.message, "Invalid username or password.");
    }
}

#[tokio::test]
async fn test_login_missing_field_returns_400() {
    let response = app()
        .oneshot(post_json("/login", json!({"user_name": "alice"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(body.message, "Username and password are required.");
}
