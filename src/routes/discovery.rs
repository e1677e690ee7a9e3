//! `GET /api-port`: tells the login form which port the control API is on.

use axum::Json;
use axum::extract::State;
use client::net::types::ApiPortResponse;

use crate::state::AppState;

pub async fn api_port(State(state): State<AppState>) -> Json<ApiPortResponse> {
    tracing::debug!(port = state.api_port, "api port requested");
    Json(ApiPortResponse { port: state.api_port })
}
