//! topicdeck: recent-topic history and favorites with pluggable persistence.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod managers;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;
