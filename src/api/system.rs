use axum::{Json, extract::State};
use std::sync::Arc;

use super::{AppState, types::HealthResponse};

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let database = if state.monitor.is_available() {
        "connected"
    } else {
        "fallback"
    };

    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
        database: database.to_string(),
    })
}
