//! Shared helpers for the core crate

pub mod format;
