//! Liveness probe handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct PingResponse {
    pub message: String,
}

/// Liveness probe, message configurable via `ping.message`
/// GET /api/ping
pub async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    Json(PingResponse {
        message: state.config.ping.message.clone(),
    })
}
