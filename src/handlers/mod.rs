//! HTTP handlers module
//!
//! Axum routes for the Alice webhook and service health.

pub mod health;
pub mod webhook;

use std::sync::Arc;
use std::time::Duration;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::middleware::LoggingMiddleware;
use crate::services::UserStore;
use crate::state::SceneCatalog;
use crate::utils::errors::{AliceSkillError, Result};

pub use health::handle_health;
pub use webhook::handle_webhook;

/// Shared, read-only dependencies of every request
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub catalog: Arc<SceneCatalog>,
    pub users: Arc<dyn UserStore>,
    /// Outbound client handed to scenes
    pub http: reqwest::Client,
    pub logging: LoggingMiddleware,
}

impl AppState {
    pub fn new(settings: Settings, catalog: SceneCatalog, users: Arc<dyn UserStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.skill.http_timeout_seconds))
            .user_agent(format!("{}/{}", settings.server.project_name, crate::VERSION))
            .build()?;

        Ok(Self {
            settings: Arc::new(settings),
            catalog: Arc::new(catalog),
            users,
            http,
            logging: LoggingMiddleware::default(),
        })
    }
}

/// Build the HTTP router with permissive CORS and request tracing
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let webhook_path = state.settings.webhook_path();

    Router::new()
        .route(&webhook_path, post(handle_webhook))
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

impl IntoResponse for AliceSkillError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}
