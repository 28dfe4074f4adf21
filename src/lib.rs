//! Bookmark Saver: a small bookmark client: add, search, and list bookmarks
//! kept by a REST backend.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
