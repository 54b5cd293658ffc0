//! ifgroup configuration file
//!
//! One TOML file holds the management API endpoint and bearer token, the
//! log format, and the `[mount]` defaults `mount-ip` falls back to when no
//! `--group` or `--host` is given. A missing file means an unconfigured API
//! and no mount defaults; only `--groups-file` resolution works then.

pub mod schema;

pub use schema::Config;

use crate::error::{IfGroupError, IfGroupResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Reads and writes the ifgroup config file
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Manager for the per-user config file
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Manager for an explicit file (`--config` / `IFGROUP_CONFIG`)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// `<config dir>/ifgroup/config.toml`, or `./ifgroup/config.toml` without a config dir
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ifgroup")
            .join("config.toml")
    }

    /// Load the file, or defaults (no endpoint, no mount group) when absent
    pub async fn load(&self) -> IfGroupResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Parse `path`; a malformed file is reported with its path
    pub async fn load_from_file(&self, path: &Path) -> IfGroupResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| IfGroupError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| IfGroupError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Write the file, readable by the owner only since it may hold the API token
    pub async fn save(&self, config: &Config) -> IfGroupResult<()> {
        self.ensure_config_dir().await?;

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            IfGroupError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&self.config_path, perms)
                .map_err(|e| IfGroupError::io("setting config file permissions", e))?;
        }

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    async fn ensure_config_dir(&self) -> IfGroupResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| IfGroupError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_default_when_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.toml");
        let manager = ConfigManager::with_path(path);

        let config = manager.load().await.unwrap();
        assert!(config.api.endpoint.is_empty());
        assert!(config.api.token.is_none());
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.mount.group.is_none());
        assert!(config.mount.host_identifier.is_none());
    }

    #[tokio::test]
    async fn save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        let manager = ConfigManager::with_path(path);

        let mut config = Config::default();
        config.api.endpoint = "https://cluster:14000/api/v2".to_string();
        config.mount.group = Some("teamA".to_string());

        manager.save(&config).await.unwrap();
        let loaded = manager.load().await.unwrap();

        assert_eq!(loaded.api.endpoint, "https://cluster:14000/api/v2");
        assert_eq!(loaded.mount.group.as_deref(), Some("teamA"));
    }

    #[tokio::test]
    async fn invalid_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[api]\ntimeout_secs = \"soon\"\n").unwrap();
        let manager = ConfigManager::with_path(path.clone());

        let err = manager.load().await.unwrap_err();
        match err {
            IfGroupError::ConfigInvalid { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn saved_token_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        let manager = ConfigManager::with_path(path.clone());

        let mut config = Config::default();
        config.api.token = Some("secret".to_string());
        manager.save(&config).await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(manager.load().await.unwrap().api.token.as_deref(), Some("secret"));
    }

    #[test]
    fn default_path_under_ifgroup_dir() {
        let path = ConfigManager::default_config_path();
        assert!(path.ends_with("ifgroup/config.toml"));
    }
}
