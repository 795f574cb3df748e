//! Dialog state module
//!
//! Scenes, their per-request context, the scene catalog and the state token
//! that links turns together

pub mod catalog;
pub mod context;
pub mod scenes;
pub mod token;

// Re-export commonly used state components
pub use catalog::{SceneCatalog, SceneConstructor};
pub use context::SceneContext;
pub use scenes::{Goodbye, Help, Scene, Welcome, WelcomeDefault};
pub use token::{SessionState, STATE_REQUEST_KEY};
