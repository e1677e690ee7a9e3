//! Wire types for the control API and the UI server discovery endpoint.

use serde::{Deserialize, Serialize};

/// Body of a successful `GET /1/auth_token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokenResponse {
    pub token: String,
}

/// Body of `GET /api-port` served by the UI server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiPortResponse {
    pub port: u16,
}
