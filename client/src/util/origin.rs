//! Origin arithmetic for server discovery.

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;

use url::Url;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum OriginError {
    #[error("invalid page url: {0}")]
    Parse(#[from] url::ParseError),

    #[error("url cannot carry a port: {0}")]
    CannotHavePort(String),
}

/// `scheme://host:port` of `page_url` with its port replaced by `port`.
///
/// # Errors
///
/// Returns `OriginError` if `page_url` is not an absolute URL with a host.
pub fn origin_with_port(page_url: &str, port: u16) -> Result<String, OriginError> {
    let mut url = Url::parse(page_url)?;
    url.set_port(Some(port))
        .map_err(|()| OriginError::CannotHavePort(page_url.to_owned()))?;
    Ok(url.origin().ascii_serialization())
}
