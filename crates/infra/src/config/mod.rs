//! Configuration loading
//!
//! `SHIFTBOARD_*` environment variables take precedence; a JSON or TOML file
//! is the fallback.

pub mod loader;

pub use loader::{find_config_path, load, load_from_env, load_from_file};
