use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, AppState, types::DeleteConfirmation};
use crate::api::validation::require_field;
use crate::models::user::{NewUser, UserSummary, UserUpdate};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

impl CreateUserRequest {
    fn into_input(self) -> Result<NewUser, ApiError> {
        Ok(NewUser {
            username: require_field(&self.username, "username")?,
            email: require_field(&self.email, "email")?,
            password: require_field(&self.password, "password")?,
            name: require_field(&self.name, "name")?,
            phone: self.phone,
            role: self.role,
            status: self.status,
        })
    }
}

/// GET /users
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    Ok(Json(state.users.list_users().await?))
}

/// POST /users
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserSummary>), ApiError> {
    let input = payload.into_input()?;
    let created = state.users.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /users/{id}
/// Merges the provided fields; absent fields stay unchanged.
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UserUpdate>,
) -> Result<Json<UserSummary>, ApiError> {
    Ok(Json(state.users.update_user(id, payload).await?))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    state.users.delete_user(id).await?;

    Ok(Json(DeleteConfirmation {
        message: "User deleted successfully".to_string(),
    }))
}
