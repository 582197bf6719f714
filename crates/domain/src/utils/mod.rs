//! Domain utilities

pub mod nullable;
pub mod timestamp;
