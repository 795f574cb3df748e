//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{AliceSkillError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_logging_config(&settings.logging)?;
    validate_skill_config(&settings.skill)?;

    Ok(())
}

/// Validate HTTP server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(AliceSkillError::Config("Server host is required".to_string()));
    }

    if config.port == 0 {
        return Err(AliceSkillError::Config(
            "Server port must be greater than 0".to_string(),
        ));
    }

    if !config.api_prefix.starts_with('/') {
        return Err(AliceSkillError::Config(format!(
            "API prefix must start with '/': {}",
            config.api_prefix
        )));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(AliceSkillError::Config("Database URL is required".to_string()));
    }

    if config.max_connections == 0 {
        return Err(AliceSkillError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(AliceSkillError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AliceSkillError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(AliceSkillError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}

/// Validate skill configuration
fn validate_skill_config(config: &super::SkillConfig) -> Result<()> {
    if config.http_timeout_seconds == 0 {
        return Err(AliceSkillError::Config(
            "HTTP timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
