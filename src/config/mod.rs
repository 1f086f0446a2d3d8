//! Configuration management for NutriView
//!
//! The configuration file doubles as the persistent token store: a login
//! writes the `session` block, a logout removes it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::debounce::SEARCH_DELAY;
use crate::error::{ConfigError, Result};
use crate::view::search::DEFAULT_LIMIT;

/// API base URL used when neither the command line nor the config sets one
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// NutriView API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Persisted session credential
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<StoredSession>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// Bearer token and user id as written by login/signup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Bearer token sent with authenticated requests
    pub access_token: String,

    /// Id of the logged-in user
    pub user_id: i64,

    /// Token expiry decoded from the JWT `exp` claim, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Quiet period before a search is sent, in milliseconds
    #[serde(default = "default_search_delay_ms")]
    pub search_delay_ms: u64,

    /// Maximum number of search results kept
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

fn default_search_delay_ms() -> u64 {
    SEARCH_DELAY.as_millis() as u64
}

fn default_search_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            search_delay_ms: default_search_delay_ms(),
            search_limit: default_search_limit(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".nutriview").join("config.yaml"))
    }

    /// Resolve an optional override into a concrete path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, or start from defaults when the file is missing
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // The file holds a bearer token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// API base URL: explicit override, then config, then the default
    pub fn api_url(&self, override_url: Option<&str>) -> String {
        override_url
            .or(self.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string()
    }
}

impl StoredSession {
    /// Whether the token is past its decoded expiry
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            None => false,
            Some(expires_at) => expires_at <= Utc::now(),
        }
    }
}
