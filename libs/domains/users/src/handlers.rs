use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use axum_helpers::{
    AppError, ErrorResponse, JwtAuth, ValidatedJson,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, UnauthorizedResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{LoginRequest, MessageResponse, RegisterUser, TokenResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

pub const REGISTRATION_SUCCESSFUL: &str = "Registration successful.";
const REGISTRATION_FAILED: &str = "Registration failed.";
const LOGIN_FAILED: &str = "Login failed.";

/// OpenAPI documentation for the auth endpoints
#[derive(OpenApi)]
#[openapi(
    paths(register, login),
    components(
        schemas(RegisterUser, LoginRequest, MessageResponse, TokenResponse, ErrorResponse),
        responses(BadRequestResponse, UnauthorizedResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "auth", description = "Account registration and login")
    )
)]
pub struct ApiDoc;

/// State shared by the auth handlers
pub struct AuthState<R: UserRepository> {
    pub service: Arc<UserService<R>>,
    pub jwt_auth: JwtAuth,
}

impl<R: UserRepository> Clone for AuthState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            jwt_auth: self.jwt_auth.clone(),
        }
    }
}

impl<R: UserRepository> AuthState<R> {
    pub fn new(service: UserService<R>, jwt_auth: JwtAuth) -> Self {
        Self {
            service: Arc::new(service),
            jwt_auth,
        }
    }
}

/// `POST /register` and `POST /login`
pub fn auth_router<R: UserRepository + 'static>(state: AuthState<R>) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(state)
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "Account created", body = MessageResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<RegisterUser>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    state
        .service
        .register(input)
        .await
        .map_err(|e| e.into_app_error(REGISTRATION_FAILED))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: REGISTRATION_SUCCESSFUL.to_string(),
        }),
    ))
}

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed JWT", body = TokenResponse),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn login<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let user = state
        .service
        .login(input)
        .await
        .map_err(|e| e.into_app_error(LOGIN_FAILED))?;

    let token = state
        .jwt_auth
        .create_token(&user.id.to_string(), &user.user_name)
        .map_err(|e| {
            tracing::error!(user_id = %user.id, "Failed to sign token: {}", e);
            AppError::InternalServerError(LOGIN_FAILED.to_string())
        })?;

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(Json(TokenResponse { token }))
}
