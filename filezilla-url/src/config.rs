//! Configuration for the URL provider.
//!
//! Settings come from an optional INI file:
//!
//! ```ini
//! [manifest]
//! url = https://update.filezilla-project.org/updatecheck.php?...
//! timeout_secs = 30
//! user_agent = filezilla-url/0.1
//! ```
//!
//! A missing file yields the defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ini::Ini;

use crate::error::ConfigError;
use crate::http::DEFAULT_TIMEOUT_SECS;

/// Update check endpoint.
///
/// The query parameters are fixed probe values that make the endpoint return
/// the full manifest; they do not describe the caller's platform.
pub const DEFAULT_MANIFEST_URL: &str = "https://update.filezilla-project.org/updatecheck.php?platform=i686-apple-darwin9&version=3.0.0&osversion=12";

const MANIFEST_SECTION: &str = "manifest";

/// Provider configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// URL of the update manifest.
    pub manifest_url: String,

    /// HTTP request timeout.
    pub timeout: Duration,

    /// User-Agent header sent with the manifest request.
    pub user_agent: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}

impl ProviderConfig {
    /// Load configuration from `path`, falling back to defaults if the file
    /// does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ini(&ini)
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let Some(section) = ini.section(Some(MANIFEST_SECTION)) else {
            return Ok(config);
        };

        if let Some(url) = section.get("url").map(str::trim).filter(|u| !u.is_empty()) {
            config.manifest_url = url.to_string();
        }

        if let Some(raw) = section.get("timeout_secs") {
            let secs: u64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: format!("{}.timeout_secs", MANIFEST_SECTION),
                    value: raw.to_string(),
                    reason: e.to_string(),
                }
            })?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    key: format!("{}.timeout_secs", MANIFEST_SECTION),
                    value: raw.to_string(),
                    reason: "must be greater than zero".to_string(),
                });
            }
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(agent) = section.get("user_agent").map(str::trim) {
            if !agent.is_empty() {
                config.user_agent = Some(agent.to_string());
            }
        }

        Ok(config)
    }

    /// Set the manifest URL.
    pub fn with_manifest_url(mut self, url: impl Into<String>) -> Self {
        self.manifest_url = url.into();
        self
    }

    /// Set the HTTP timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }
}

/// Default config file path (`<config dir>/filezilla-url/config.ini`).
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("filezilla-url").join("config.ini"))
}
