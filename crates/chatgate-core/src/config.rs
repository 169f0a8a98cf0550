//! Configuration management for chatgate.
//!
//! Loads configuration from ${CHATGATE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for chatgate configuration and data directories.
    //!
    //! CHATGATE_HOME resolution order:
    //! 1. CHATGATE_HOME environment variable (if set)
    //! 2. ~/.config/chatgate (default)

    use std::path::PathBuf;

    /// Returns the chatgate home directory.
    ///
    /// Checks CHATGATE_HOME env var first, falls back to ~/.config/chatgate.
    /// Falls back to a relative `.chatgate` when no home directory is known.
    pub fn chatgate_home() -> PathBuf {
        if let Ok(home) = std::env::var("CHATGATE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".chatgate"),
            |h| h.join(".config").join("chatgate"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        chatgate_home().join("config.toml")
    }

    /// Returns the directory holding rolling log files.
    pub fn log_dir() -> PathBuf {
        chatgate_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the chat server
    pub server_url: String,

    /// Segment prepended to every auth endpoint
    pub auth_prefix: String,

    /// Where a successful login leads
    pub post_login_path: String,

    /// Request timeout in seconds (0 disables)
    pub request_timeout_secs: u32,

    /// Open the post-login location in the system browser
    pub open_browser: bool,

    /// Log filter used when CHATGATE_LOG is unset
    pub log_level: String,
}

impl Config {
    pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000/";
    pub const DEFAULT_AUTH_PREFIX: &str = "auth/";
    pub const DEFAULT_POST_LOGIN_PATH: &str = "/chat";
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Parsed server base URL.
    ///
    /// A trailing slash is added when missing so relative joins keep the
    /// last path segment (`http://host/app` + `auth/` → `http://host/app/auth/`).
    ///
    /// # Errors
    /// Returns an error if `server_url` is not a valid absolute URL.
    pub fn base_url(&self) -> Result<Url> {
        let mut raw = self.server_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).with_context(|| format!("Invalid server_url: {}", self.server_url))
    }

    /// Resolves a location (such as the post-login path) against the server.
    ///
    /// # Errors
    /// Returns an error if the server URL or the location is invalid.
    pub fn location_url(&self, location: &str) -> Result<Url> {
        self.base_url()?
            .join(location)
            .with_context(|| format!("Invalid location: {location}"))
    }

    /// Returns the request timeout, or None if disabled (0).
    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(u64::from(self.request_timeout_secs)))
        }
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: Self::DEFAULT_SERVER_URL.to_string(),
            auth_prefix: Self::DEFAULT_AUTH_PREFIX.to_string(),
            post_login_path: Self::DEFAULT_POST_LOGIN_PATH.to_string(),
            request_timeout_secs: 0,
            open_browser: false,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
