//! # Shiftboard Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Sensor resolution (which sensors of a set were uploaded)
//! - Shift partitioning, combining and refetch reconciliation
//! - The data store controller and its port interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `shiftboard-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod sensors;
pub mod shifts;
pub mod store;
pub mod utils;

// Re-export specific items to avoid ambiguity
pub use sensors::resolve_sensors;
pub use shifts::{combine, partition, reconcile, try_combine, Reconciler};
pub use store::ports::{FeedProvider, StateRepository};
pub use store::{DataState, DataStore};
