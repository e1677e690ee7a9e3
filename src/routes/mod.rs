//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the discovery/health endpoints with Leptos SSR
//! rendering under a single Axum router. The WASM bundle and stylesheet are
//! served from `<site_root>/pkg`; any other path falls through to static
//! files under the site root.

pub mod discovery;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Endpoints that do not depend on Leptos configuration.
///
/// CORS is open: the login form may be served from a different origin than
/// the one it discovers the API port from.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api-port", get(discovery::api_port))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full UI server: API routes + Leptos SSR at `/` + static assets from
/// `site_root`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState, site_root: &Path) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(ui_router(state, conf.leptos_options, site_root))
}

/// Router assembly once Leptos options are resolved.
pub fn ui_router(state: AppState, leptos_options: LeptosOptions, site_root: &Path) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    tracing::info!(site_root = %site_root.display(), "serving ui assets");

    api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root).append_index_html_on_directories(true))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
