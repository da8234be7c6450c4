//! Registration and login handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User email address
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User display name, printed on certificates
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// User password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "secret")]
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "secret")]
    pub password: String,
}

/// Body of a successful registration
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub user: UserResponse,
}

/// Body of a successful login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    pub user: UserResponse,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Missing field"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Error registering user")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let user = state
        .auth_service
        .register(payload.email, payload.name, payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: UserResponse::from(user),
        }),
    ))
}

/// Check a password and return the user
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing field"),
        (status = 401, description = "Invalid credentials"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Error logging in")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: UserResponse::from(user),
    }))
}
