//! Registration and login routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use worklog_core::auth::{hash_password, verify_password};
use worklog_db::repositories::{CreateUserInput, UserRepository};
use worklog_shared::types::UserId;

use crate::{AppState, error::ApiError};

/// Creates the auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Request body for registration and login.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Optional display name (registration only).
    pub display_name: Option<String>,
}

/// Response carrying a fresh access token.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// JWT access token.
    pub access_token: String,
    /// Always "bearer".
    pub token_type: &'static str,
}

/// POST `/auth/register` - Create an account and issue a token.
async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if body.email.trim().is_empty() || body.password.is_empty() {
        return Err(ApiError::bad_request("email and password are required"));
    }

    let password_hash =
        hash_password(&body.password).map_err(|e| ApiError::internal(e.to_string()))?;

    let users = UserRepository::new((*state.db).clone());
    let user = users
        .create(CreateUserInput {
            email: body.email.trim().to_lowercase(),
            password_hash,
            display_name: body.display_name,
        })
        .await?;

    info!(user_id = %user.id, "user registered");

    let token = issue_token(&state, UserId::from_uuid(user.id))?;
    Ok((StatusCode::CREATED, Json(token)))
}

/// POST `/auth/login` - Verify credentials and issue a token.
async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let users = UserRepository::new((*state.db).clone());

    let Some(user) = users.find_by_email(&body.email.trim().to_lowercase()).await? else {
        return Err(ApiError::unauthorized("Incorrect email or password"));
    };

    let valid = verify_password(&body.password, &user.password_hash)
        .map_err(|e| ApiError::internal(e.to_string()))?;
    if !valid {
        return Err(ApiError::unauthorized("Incorrect email or password"));
    }

    let token = issue_token(&state, UserId::from_uuid(user.id))?;
    Ok((StatusCode::OK, Json(token)))
}

fn issue_token(state: &AppState, user_id: UserId) -> Result<TokenResponse, ApiError> {
    let access_token = state
        .jwt_service
        .generate_access_token(user_id)
        .map_err(|e| ApiError::internal(e.to_string()))?;
    Ok(TokenResponse {
        access_token,
        token_type: "bearer",
    })
}
