use serde::{Deserialize, Serialize};

use crate::models::user::AuthenticatedUser;

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: AuthenticatedUser,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    /// "connected" while the relational store serves requests, "fallback"
    /// when the in-memory mirror does.
    pub database: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}
