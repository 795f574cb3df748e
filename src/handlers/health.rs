//! Health check handler

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::AppState;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub user_store: String,
    pub scenes: Vec<String>,
}

/// Report liveness and user store reachability
pub async fn handle_health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, user_store) = match state.users.health_check().await {
        Ok(()) => (StatusCode::OK, "ok".to_string()),
        Err(e) => {
            warn!(error = %e, "User store health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable".to_string())
        }
    };

    let body = HealthResponse {
        status: if status.is_success() { "ok" } else { "degraded" }.to_string(),
        service: state.settings.server.project_name.clone(),
        version: crate::VERSION.to_string(),
        user_store,
        scenes: state.catalog.ids().into_iter().map(str::to_string).collect(),
    };

    (status, Json(body))
}
