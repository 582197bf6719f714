//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If a required variable is missing, falls back to a config file
//! 3. Searches multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `SHIFTBOARD_API_URL`: Platform base URL (required)
//! - `SHIFTBOARD_GROUP_UUID`: Data store group to read (required)
//! - `SHIFTBOARD_API_TOKEN`: Bearer token (required)
//! - `SHIFTBOARD_PAGE_SIZE`: Records per feed request
//! - `SHIFTBOARD_API_TIMEOUT`: Request timeout in seconds
//! - `SHIFTBOARD_STORAGE_DIR`: Directory for persisted dashboard state
//! - `SHIFTBOARD_BIND_ADDRESS`: Address the HTTP server listens on
//!
//! ## File Locations
//! The loader searches the following paths (in order):
//! 1. `./shiftboard.json` or `./shiftboard.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use shiftboard_domain::{ApiConfig, Config, Result, ServerConfig, ShiftboardError, StorageConfig};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["shiftboard.json", "shiftboard.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `ShiftboardError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// The three platform variables must be present; everything else falls
/// back to its default.
///
/// # Errors
/// Returns `ShiftboardError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let mut api = ApiConfig::new(
        env_var("SHIFTBOARD_API_URL")?,
        env_var("SHIFTBOARD_GROUP_UUID")?,
        env_var("SHIFTBOARD_API_TOKEN")?,
    );
    api.page_size = env_parse("SHIFTBOARD_PAGE_SIZE", api.page_size)?;
    api.timeout_seconds = env_parse("SHIFTBOARD_API_TIMEOUT", api.timeout_seconds)?;

    let mut storage = StorageConfig::default();
    if let Some(directory) = env_optional("SHIFTBOARD_STORAGE_DIR") {
        storage.directory = directory;
    }

    let mut server = ServerConfig::default();
    if let Some(bind_address) = env_optional("SHIFTBOARD_BIND_ADDRESS") {
        server.bind_address = bind_address;
    }

    Ok(Config { api, storage, server })
}

/// Load configuration from a file
///
/// If `path` is `None`, searches multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ShiftboardError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ShiftboardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => find_config_path().ok_or_else(|| {
            ShiftboardError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ShiftboardError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ShiftboardError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ShiftboardError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(ShiftboardError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Search multiple paths for configuration files
///
/// Searches the current working directory first, then the directory of the
/// running executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn find_config_path() -> Option<PathBuf> {
    let mut directories = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        directories.push(cwd);
    }

    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        directories.push(exe_dir);
    }

    directories
        .iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `ShiftboardError::Config` if the variable is not set or blank.
fn env_var(key: &str) -> Result<String> {
    env_optional(key).ok_or_else(|| {
        ShiftboardError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Non-blank environment variable, trimmed
fn env_optional(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

/// Parse an optional environment variable, using `default` when unset
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_optional(key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| ShiftboardError::Config(format!("Invalid value for {}: {}", key, e))),
        None => Ok(default),
    }
}
