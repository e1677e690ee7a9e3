//! UI server configuration parsed from environment variables.

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_API_PORT: u16 = 8080;
pub const DEFAULT_SITE_ROOT: &str = "target/site";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    pub port: u16,
    pub api_port: u16,
    pub site_root: PathBuf,
}

impl UiConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 8000
    /// - `API_PORT`: control API port returned by `/api-port`, default 8080
    /// - `SITE_ROOT`: directory holding `pkg/` and static files, default `target/site`
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: env_port("PORT", DEFAULT_PORT)?,
            api_port: env_port("API_PORT", DEFAULT_API_PORT)?,
            site_root: env_path("SITE_ROOT", DEFAULT_SITE_ROOT),
        })
    }
}

/// Path from `key`, using `default` when unset or blank.
pub(crate) fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
        .map_or_else(|| PathBuf::from(default), PathBuf::from)
}

/// Parse a port from `key`, using `default` when unset or blank. A set but
/// unparsable value is an error rather than a silent fallback.
pub(crate) fn env_port(key: &str, default: u16) -> Result<u16, ConfigError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(default);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort { var: key.to_owned(), value: raw.clone() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
