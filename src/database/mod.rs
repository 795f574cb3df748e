//! Database module
//!
//! This module handles database connections and the user repository

pub mod connection;
pub mod repositories;

// Re-export commonly used database components
pub use connection::{create_pool, health_check, run_migrations, DatabasePool};
pub use repositories::UserRepository;
