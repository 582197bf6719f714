//! Vendor platform API client
//!
//! Fetches the two feeds the dashboard is built from: data source uploads
//! and consolidated measurements. Requests go through [`HttpClient`]
//! (timeouts, retries) and carry the configured bearer token.
//!
//! [`HttpClient`]: crate::http::HttpClient

pub mod client;
pub mod errors;

pub use client::{PlatformClient, PlatformResource};
pub use errors::ApiError;
