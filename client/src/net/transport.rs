//! HTTP seam between the session logic and the browser's fetch API.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Server-side (SSR) and native tests: `BrowserTransport` reports
//! `Unavailable`; tests substitute a scripted transport instead.
//!
//! Only `GET` with an optional `Authorization` header is needed: every call
//! the admin UI makes has that shape.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde::de::DeserializeOwned;

/// Status code the control API uses for every success.
pub const STATUS_OK: u16 = 200;

/// Status line and body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Exactly 200; other 2xx codes are not treated as success.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// The request could not be completed (the fetch promise rejected).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("not available on server")]
    Unavailable,
}

/// Minimal async HTTP client.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// Issue `GET url`, sending `authorization` as the `Authorization` header
    /// when present.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` when no response was received. Any received
    /// status, including 4xx/5xx, is an `Ok` response.
    async fn get(&self, url: &str, authorization: Option<&str>) -> Result<HttpResponse, TransportError>;
}

/// Transport backed by the browser fetch API.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl HttpTransport for BrowserTransport {
    async fn get(&self, url: &str, authorization: Option<&str>) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let mut request = gloo_net::http::Request::get(url);
            if let Some(value) = authorization {
                request = request.header("Authorization", value);
            }
            let resp = request
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, authorization);
            Err(TransportError::Unavailable)
        }
    }
}
