//! AliceSkill webhook server
//!
//! Main application entry point

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use AliceSkill::{
    config::Settings,
    database::{create_pool, run_migrations, UserRepository},
    handlers::{create_router, AppState},
    state::SceneCatalog,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env before reading configuration
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file writer flushing until exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!(project = %settings.server.project_name, "Starting {}...", AliceSkill::info());

    // Initialize database connection
    info!("Connecting to database...");
    let db_pool = create_pool(&settings.database).await?;
    run_migrations(&db_pool).await?;

    let users = Arc::new(UserRepository::new(db_pool));
    let catalog = SceneCatalog::default();
    info!(scenes = ?catalog.ids(), "Scene catalog loaded");

    let bind_address = settings.bind_address();
    let webhook_path = settings.webhook_path();
    let state = AppState::new(settings, catalog, users)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    info!(address = %bind_address, webhook = %webhook_path, "Webhook server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("AliceSkill server has been shut down.");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
