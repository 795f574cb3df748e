//! AliceSkill voice assistant backend
//!
//! Routes Yandex Alice webhook events through a scene-based dialog state machine.
//! Conversation continuity lives in the state token Alice echoes back on every turn,
//! first-contact users are onboarded through a persistent user store.

#![allow(non_snake_case)]

pub mod alice;
pub mod config;
pub mod database;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AliceSkillError, Result};

// Re-export main components for easy access
pub use alice::{AliceRequest, AliceResponse};
pub use database::UserRepository;
pub use services::{DialogRouter, UserStore};
pub use state::{Scene, SceneCatalog, SceneContext};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
