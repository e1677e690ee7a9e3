//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth` for the login status, `ui` for the home
//! tab) so pages can depend on small focused models.

pub mod auth;
pub mod ui;
