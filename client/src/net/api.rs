//! Control API auth calls: credential exchange and liveness probe.
//!
//! ERROR HANDLING
//! ==============
//! The exchange collapses every failure into one of two `LoginError`
//! variants; the liveness probe collapses every failure into `false`.
//! Neither retries. Credentials and tokens never reach the log.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::transport::HttpTransport;
use super::types::AuthTokenResponse;
use crate::session::LoginError;

pub const AUTH_TOKEN_PATH: &str = "/1/auth_token";
pub const RUN_STATE_PATH: &str = "/1/run";

/// `Basic base64(username:password)`.
pub fn basic_auth_header(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

pub fn bearer_auth_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Join an origin and an absolute API path, tolerating a trailing `/` on
/// the origin.
pub fn endpoint(origin: &str, path: &str) -> String {
    format!("{}{path}", origin.trim_end_matches('/'))
}

/// Auth requests against one control server, over any transport.
#[derive(Clone, Debug, Default)]
pub struct AuthClient<T> {
    transport: T,
}

impl<T: HttpTransport> AuthClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Exchange credentials for a bearer token via `GET /1/auth_token`.
    ///
    /// # Errors
    ///
    /// - `LoginError::InvalidCredentials` on any status other than 200.
    /// - `LoginError::Network` when the request fails or a 200 body has no
    ///   readable `token`.
    pub async fn exchange_credentials(&self, server: &str, username: &str, password: &str) -> Result<String, LoginError> {
        let url = endpoint(server, AUTH_TOKEN_PATH);
        let header = basic_auth_header(username, password);
        let resp = self.transport.get(&url, Some(&header)).await.map_err(|e| {
            log::warn!("token exchange with {server} failed: {e}");
            LoginError::Network
        })?;
        if !resp.is_ok() {
            log::info!("token exchange with {server} rejected: status {}", resp.status);
            return Err(LoginError::InvalidCredentials);
        }
        let body: AuthTokenResponse = resp.json().map_err(|e| {
            log::warn!("token exchange with {server} returned an unreadable body: {e}");
            LoginError::Network
        })?;
        Ok(body.token)
    }

    /// Probe `GET /1/run` with the bearer token. Only a 200 counts.
    pub async fn token_accepted(&self, server: &str, token: &str) -> bool {
        let url = endpoint(server, RUN_STATE_PATH);
        match self.transport.get(&url, Some(&bearer_auth_header(token))).await {
            Ok(resp) => {
                log::debug!("liveness check against {server}: status {}", resp.status);
                resp.is_ok()
            }
            Err(e) => {
                log::debug!("liveness check against {server} failed: {e}");
                false
            }
        }
    }
}
