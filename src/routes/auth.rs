use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};

use crate::constants::{ERR_EMPTY_FIELDS, ERR_FIELD_TOO_LONG};
use crate::error::{AppError, Result};
use crate::models::AccountRecord;
use crate::routes::validation::bearer_token;
use crate::store::{CredentialStore, SessionStore};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    /// Optional confirmation field; checked only when supplied
    #[serde(rename = "confirmPassword", default)]
    pub confirm_password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Register a new account
///
/// Rejects blank and over-length fields, a mismatched confirmation, and
/// usernames that are already taken (case-sensitive exact match).
///
/// Returns 409 Conflict if the username already exists.
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>> {
    if payload.username.is_empty() || payload.password.is_empty() {
        return Err(AppError::InvalidInput(ERR_EMPTY_FIELDS.to_string()));
    }
    if !AccountRecord::validate_field(&payload.username)
        || !AccountRecord::validate_field(&payload.password)
    {
        return Err(AppError::InvalidInput(ERR_FIELD_TOO_LONG.to_string()));
    }
    if let Some(confirm) = &payload.confirm_password {
        if confirm != &payload.password {
            return Err(AppError::PasswordMismatch);
        }
    }

    let db = state.db.clone();
    tokio::task::spawn_blocking(move || {
        CredentialStore::new(db).register(&payload.username, &payload.password)
    })
    .await??;

    Ok(Json(RegisterResponse { success: true }))
}

/// Log in with an existing account
///
/// A matching username/password pair opens a session; the response carries
/// the bearer token for the rest of the interaction. Any mismatch, including
/// an unknown username, is the same `InvalidCredentials` failure.
pub async fn login_user(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let db = state.db.clone();
    let ttl_secs = state.config.session_ttl_secs;
    let username = payload.username.clone();

    let token = tokio::task::spawn_blocking(move || -> Result<String> {
        let credentials = CredentialStore::new(db.clone());
        if !credentials.authenticate(&payload.username, &payload.password)? {
            tracing::info!("Failed login attempt for {}", payload.username);
            return Err(AppError::InvalidCredentials);
        }

        SessionStore::new(db).create(&payload.username, ttl_secs)
    })
    .await??;

    tracing::info!("Login successful: {}", username);

    Ok(Json(LoginResponse { token, username }))
}

/// Log out, invalidating the caller's session token
pub async fn logout_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<LogoutResponse>> {
    let token = bearer_token(&headers)
        .ok_or(AppError::Unauthorized)?
        .to_string();

    let db = state.db.clone();
    tokio::task::spawn_blocking(move || SessionStore::new(db).delete(&token)).await??;

    Ok(Json(LogoutResponse { success: true }))
}
