//! Client configuration baked in at compile time.
//!
//! Both values may be overridden when building the WASM bundle:
//! - `ARGO_DISCOVERY_URL`: where the login form looks up the API port
//! - `ARGO_DEFAULT_SERVER`: origin used when discovery fails

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_DISCOVERY_URL: &str = "http://localhost:8000/api-port";
pub const DEFAULT_SERVER: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub discovery_url: String,
    pub default_server: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { discovery_url: DEFAULT_DISCOVERY_URL.to_owned(), default_server: DEFAULT_SERVER.to_owned() }
    }
}

impl ClientConfig {
    /// Build config from the `option_env!` values captured by the compiler.
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("ARGO_DISCOVERY_URL"), option_env!("ARGO_DEFAULT_SERVER"))
    }

    fn from_overrides(discovery_url: Option<&str>, default_server: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            discovery_url: non_empty(discovery_url).unwrap_or(defaults.discovery_url),
            default_server: non_empty(default_server).unwrap_or(defaults.default_server),
        }
    }
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}
