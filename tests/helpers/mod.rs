//! Test helpers module
//!
//! This module provides utilities and helpers for testing the AliceSkill service.
//! It includes an in-memory user store, event builders, scripted scenes and a
//! test server launcher.

#![allow(dead_code)]

pub mod simple_test;
pub mod test_data;
pub mod test_server;
pub mod user_store_mock;

pub use simple_test::*;
pub use test_data::*;
pub use test_server::*;
pub use user_store_mock::*;
