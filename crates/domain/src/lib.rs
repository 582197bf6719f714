//! # Shiftboard Domain
//!
//! Business domain types and models for Shiftboard.
//!
//! This crate contains:
//! - Feed records (measurements, uploads) and the vendor response envelope
//! - Shift groups and sensor descriptors
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Shiftboard crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::timestamp::{calendar_day, parse_timestamp};
