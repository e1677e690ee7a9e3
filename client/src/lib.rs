//! # client
//!
//! Leptos + WASM admin front end for the Argo DNS control API.
//!
//! The crate renders two screens: a login form that exchanges basic-auth
//! credentials for a bearer token, and a tabbed home shell. Which screen is
//! shown depends on a liveness round trip made with the stored token.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the auth lifecycle (persisted origin + token, login,
//! logout, liveness). `net` holds the HTTP seam and wire types. `pages` and
//! `app` are presentation only.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("argo admin client starting");
    leptos::mount::hydrate_body(app::App);
}
