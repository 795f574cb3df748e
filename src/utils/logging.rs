//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the AliceSkill application.

use tracing::{debug, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;
use crate::utils::errors::{AliceSkillError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file appender when dropped, so the caller
/// must hold it for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| AliceSkillError::Config(format!("Invalid log filter: {}", e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "alice-skill.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AliceSkillError::Config(format!("Failed to install subscriber: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log one completed dialog turn
pub fn log_dialog_turn(identity: Option<&str>, from_scene: Option<&str>, to_scene: &str, branch: &str) {
    info!(
        identity = identity,
        from_scene = from_scene,
        to_scene = to_scene,
        branch = branch,
        "Dialog turn routed"
    );
}

/// Log first-contact onboarding results
pub fn log_user_onboarding(identity: &str, created: bool) {
    if created {
        info!(identity = identity, "New user registered");
    } else {
        debug!(identity = identity, "Returning user recognized");
    }
}

/// Log database operations
pub fn log_database_operation(operation: &str, table: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation completed"
        );
    } else {
        error!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation failed"
        );
    }
}
