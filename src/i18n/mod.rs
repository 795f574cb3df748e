//! Internationalization module
//!
//! Message tables for user-facing scene wording.

pub mod loader;

pub use loader::{MessageParams, Messages};
