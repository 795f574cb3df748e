//! Data models module
//!
//! This module contains the persisted data structures

pub mod user;

// Re-export commonly used models
pub use user::{CreateUserRequest, Platform, User};
