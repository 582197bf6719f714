//! # Shiftboard Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP client with retries and the vendor platform API client
//! - Configuration loading from environment and files
//! - JSON file and in-memory persistence of dashboard state
//!
//! ## Architecture
//! - Implements traits defined in `shiftboard-core`
//! - Depends on `shiftboard-domain` and `shiftboard-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod persistence;

// Re-export commonly used items
pub use api::{ApiError, PlatformClient, PlatformResource};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder, RetryPolicy};
pub use persistence::{InMemoryStateRepository, JsonFileStateRepository};
