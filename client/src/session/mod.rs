//! Session lifecycle: liveness check, login exchange, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! A stored token only means "provisionally logged in". The app root calls
//! `is_logged_in` on every mount, and a revoked or expired token is only
//! discovered there. Nothing is invalidated proactively.
//!
//! ERROR HANDLING
//! ==============
//! Login failures surface as `LoginError`, whose `Display` text is shown
//! verbatim under the form. Liveness failures are not errors: they route
//! the user to the login screen.

pub mod discovery;
pub mod store;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::AuthClient;
use crate::net::transport::{BrowserTransport, HttpTransport};
use store::{BrowserStorage, KeyValueStore, SessionStore};

/// Where a successful login sends the browser.
pub const APP_ROOT: &str = "/";

/// Why a login attempt failed. Bad credentials and server errors are not
/// distinguished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Network error")]
    Network,
}

/// Validated login form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub server: String,
    pub username: String,
    pub password: String,
}

/// Session store plus auth client for one browser tab.
#[derive(Clone, Debug, Default)]
pub struct Session<S, T> {
    store: SessionStore<S>,
    client: AuthClient<T>,
}

/// The session used by the running app.
pub type BrowserSession = Session<BrowserStorage, BrowserTransport>;

impl BrowserSession {
    pub fn browser() -> Self {
        Self::new(BrowserStorage, BrowserTransport)
    }
}

impl<S: KeyValueStore, T: HttpTransport> Session<S, T> {
    pub fn new(storage: S, transport: T) -> Self {
        Self { store: SessionStore::new(storage), client: AuthClient::new(transport) }
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub fn client(&self) -> &AuthClient<T> {
        &self.client
    }

    /// Origin the current token was issued by, for display.
    pub fn server(&self) -> Option<String> {
        self.store.server()
    }

    /// Liveness check. Without a stored token (or origin) no request is made.
    pub async fn is_logged_in(&self) -> bool {
        let Some(token) = self.store.auth_token() else {
            log::debug!("no stored token; not logged in");
            return false;
        };
        let Some(server) = self.store.server() else {
            log::debug!("token stored without a server origin; not logged in");
            return false;
        };
        let alive = self.client.token_accepted(&server, &token).await;
        if !alive {
            log::info!("stored token no longer accepted by {server}");
        }
        alive
    }

    /// Exchange credentials, persist origin and token, then `navigate` to
    /// the app root. Nothing is persisted on failure.
    ///
    /// # Errors
    ///
    /// Returns the `LoginError` from the token exchange.
    pub async fn log_in<F>(&self, credentials: &Credentials, navigate: F) -> Result<(), LoginError>
    where
        F: FnOnce(&str),
    {
        let token = self
            .client
            .exchange_credentials(&credentials.server, &credentials.username, &credentials.password)
            .await?;
        self.store.save(&credentials.server, &token);
        log::info!("logged in to {}", credentials.server);
        navigate(APP_ROOT);
        Ok(())
    }

    /// Forget origin and token. No server call is made.
    pub fn log_out(&self) {
        self.store.clear();
        log::info!("logged out");
    }
}
