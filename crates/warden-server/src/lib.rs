//! Warden HTTP Server Library
//!
//! Provides REST API components for testing and reuse.

pub mod api;
pub mod config;
pub mod directory;
pub mod engine;
pub mod error;
