//! Dashboard data store
//!
//! Owns the fetched feeds, the shift groups derived from them and the
//! request status, and persists the durable subset through a
//! [`StateRepository`](ports::StateRepository) after every change.

pub mod ports;
pub mod service;
pub mod state;

pub use service::DataStore;
pub use state::DataState;
