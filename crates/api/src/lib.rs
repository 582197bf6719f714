//! # Shiftboard App
//!
//! HTTP application layer - routes and main entry point.
//!
//! This crate contains:
//! - axum routes (dashboard backend: vendor proxy and data store commands)
//! - Application context (dependency injection)
//! - Logging setup and command logging helpers
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Exposes the data store to the dashboard over HTTP

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::router;
pub use context::AppContext;
