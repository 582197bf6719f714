//! Persistence adapters for the store's `StateRepository` port

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStateRepository;
pub use memory::InMemoryStateRepository;
