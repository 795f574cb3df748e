//! Error handling for AliceSkill
//!
//! This module defines the main error types used throughout the application
//! and maps them onto HTTP status codes for the webhook surface.

use axum::http::StatusCode;
use thiserror::Error;

/// Main error type for AliceSkill application
#[derive(Error, Debug)]
pub enum AliceSkillError {
    #[error("Malformed event: {0}")]
    MalformedEvent(#[source] serde_json::Error),

    #[error("Event carries neither a user id nor an application id")]
    MissingIdentity,

    #[error("User store error: {0}")]
    UserStore(#[from] UserStoreError),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// User store specific errors
#[derive(Error, Debug)]
pub enum UserStoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("User store unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for AliceSkill operations
pub type Result<T> = std::result::Result<T, AliceSkillError>;

/// Result type alias for user store operations
pub type UserStoreResult<T> = std::result::Result<T, UserStoreError>;

impl From<sqlx::Error> for AliceSkillError {
    fn from(err: sqlx::Error) -> Self {
        AliceSkillError::UserStore(UserStoreError::Database(err))
    }
}

impl From<config::ConfigError> for AliceSkillError {
    fn from(err: config::ConfigError) -> Self {
        AliceSkillError::Config(err.to_string())
    }
}

impl AliceSkillError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            AliceSkillError::MalformedEvent(_) => false,
            AliceSkillError::MissingIdentity => false,
            AliceSkillError::UserStore(_) => true,
            AliceSkillError::Migration(_) => false,
            AliceSkillError::Config(_) => false,
            AliceSkillError::Http(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AliceSkillError::MalformedEvent(_) => ErrorSeverity::Info,
            AliceSkillError::MissingIdentity => ErrorSeverity::Warning,
            AliceSkillError::Migration(_) => ErrorSeverity::Critical,
            AliceSkillError::Config(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }

    /// HTTP status reported to the platform for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AliceSkillError::MalformedEvent(_) | AliceSkillError::MissingIdentity => {
                StatusCode::BAD_REQUEST
            }
            AliceSkillError::UserStore(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
