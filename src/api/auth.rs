use axum::{Json, extract::State};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, AppState, types::LoginResponse};
use crate::api::validation::require_field;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username or email; both identify the account.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /auth/login
/// Matches username OR email with an exact password, returns a user summary.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let identifier = require_field(&payload.username, "Username")?;
    if payload.password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }

    let user = state
        .users
        .authenticate(&identifier, &payload.password)
        .await?;

    tracing::info!("Login successful for user: {}", user.username);

    Ok(Json(LoginResponse {
        success: true,
        user,
    }))
}
