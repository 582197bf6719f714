//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_MAX_ATTEMPTS, DEFAULT_API_TIMEOUT_SECS, DEFAULT_BIND_ADDRESS, DEFAULT_PAGE_SIZE,
    DEFAULT_STORAGE_DIR, STORAGE_NAMESPACE,
};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Vendor platform access
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub group_uuid: String,
    #[serde(skip_serializing)]
    pub auth_token: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

/// Local persistence of dashboard state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub directory: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_API_TIMEOUT_SECS
}

fn default_max_attempts() -> usize {
    DEFAULT_API_MAX_ATTEMPTS
}

fn default_namespace() -> String {
    STORAGE_NAMESPACE.to_string()
}

impl ApiConfig {
    /// Build an API config with default paging and timeouts.
    pub fn new(
        base_url: impl Into<String>,
        group_uuid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            group_uuid: group_uuid.into(),
            auth_token: auth_token.into(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_seconds: DEFAULT_API_TIMEOUT_SECS,
            max_attempts: DEFAULT_API_MAX_ATTEMPTS,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { directory: DEFAULT_STORAGE_DIR.to_string(), namespace: default_namespace() }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_address: DEFAULT_BIND_ADDRESS.to_string() }
    }
}
