//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! UI server keeps no sessions and no DNS data; the only shared value is the
//! control API port advertised to the login form.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppState {
    pub api_port: u16,
}

impl AppState {
    pub fn new(api_port: u16) -> Self {
        Self { api_port }
    }
}
