//! Services module
//!
//! This module contains the dialog routing logic and the user store contract it
//! depends on.

pub mod dialog;
pub mod user_store;

// Re-export commonly used services
pub use dialog::DialogRouter;
pub use user_store::{FirstContact, UserStore};
