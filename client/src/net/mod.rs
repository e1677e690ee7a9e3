//! Networking modules for the control API and UI server.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP seam (browser fetch in production, scripted in
//! tests), `api` builds the auth requests on top of it, and `types` defines
//! the wire schema shared with the UI server.

pub mod api;
pub mod transport;
pub mod types;
