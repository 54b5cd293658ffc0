//! Configuration schema for ifgroup
//!
//! Configuration is stored at `~/.config/ifgroup/config.toml`

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Storage cluster API settings
    pub api: ApiConfig,

    /// Mount address selection settings
    pub mount: MountConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Storage cluster API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the management API, e.g. `https://cluster:14000/api/v2`
    pub endpoint: String,

    /// Bearer token sent with every request
    pub token: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            token: None,
            timeout_secs: 30,
        }
    }
}

/// Mount address selection settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MountConfig {
    /// NFS interface group to use when none is requested
    pub group: Option<String>,

    /// Host identifier to hash instead of the hostname
    pub host_identifier: Option<String>,
}
