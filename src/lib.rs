//! Linkextract - media link extraction API service
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod extractor;
pub mod server;
