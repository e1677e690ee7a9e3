//! Page-location helpers for server discovery.
//!
//! `origin` derives "same host, other port" origins from the current page
//! URL; `browser` reads and replaces `window.location` (inert off the
//! browser).

pub mod browser;
pub mod origin;
