//! Default server origin for the login form.
//!
//! The UI server advertises the control API port at `/api-port`; the
//! default origin is the current page origin with that port substituted.
//! Any failure falls back to the configured default server, so the form
//! always gets a string.

#[cfg(test)]
#[path = "discovery_test.rs"]
mod discovery_test;

use crate::config::ClientConfig;
use crate::net::transport::{HttpTransport, TransportError};
use crate::net::types::ApiPortResponse;
use crate::util::origin::{OriginError, origin_with_port};

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("discovery endpoint returned status {0}")]
    Status(u16),

    #[error("discovery body unreadable: {0}")]
    Body(#[from] serde_json::Error),

    #[error(transparent)]
    Origin(#[from] OriginError),
}

/// Look up the API port and derive an origin from `page_url`.
///
/// # Errors
///
/// Returns `DiscoveryError` if the lookup fails, answers with a non-200
/// status or an unreadable body, or `page_url` cannot carry a port.
pub async fn lookup_server<T: HttpTransport>(
    transport: &T,
    discovery_url: &str,
    page_url: &str,
) -> Result<String, DiscoveryError> {
    let resp = transport.get(discovery_url, None).await?;
    if !resp.is_ok() {
        return Err(DiscoveryError::Status(resp.status));
    }
    let body: ApiPortResponse = resp.json()?;
    Ok(origin_with_port(page_url, body.port)?)
}

/// Discovered origin, or `config.default_server` when discovery fails.
pub async fn discover_default_server<T: HttpTransport>(transport: &T, config: &ClientConfig, page_url: &str) -> String {
    match lookup_server(transport, &config.discovery_url, page_url).await {
        Ok(origin) => {
            log::debug!("discovered default server {origin}");
            origin
        }
        Err(e) => {
            log::warn!("server discovery failed, using {}: {e}", config.default_server);
            config.default_server.clone()
        }
    }
}
