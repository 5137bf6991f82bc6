//! Fetch configuration loaded from the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration for the backend booking fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Backend base URL, HTTPS only.
    pub base_url: String,
    pub timeout_secs: u64,
    pub max_retries: usize,
    pub retry_delay_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.freekick.app".to_string(),
            timeout_secs: 20,
            max_retries: 2,
            retry_delay_ms: 400,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Path of the user's config file, when a platform config directory exists.
pub fn config_file_path() -> Option<PathBuf> {
    ProjectDirs::from("app", "FreeKick", "freekick-calendar")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration from a specific TOML file.
///
/// An absent file yields the defaults; an unreadable or malformed file is an
/// error rather than a silent fallback, so a typo does not quietly point the
/// dashboard at the wrong backend.
pub fn load_from_path(path: &Path) -> Result<FetchConfig, ConfigError> {
    if !path.exists() {
        return Ok(FetchConfig::default());
    }

    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load configuration from the platform config directory, defaulting when no
/// config directory is available on this system.
pub fn load() -> Result<FetchConfig, ConfigError> {
    match config_file_path() {
        Some(path) => load_from_path(&path),
        None => Ok(FetchConfig::default()),
    }
}
