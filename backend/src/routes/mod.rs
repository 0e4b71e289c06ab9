//! Route definitions for the Farm Advisory Dashboard

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes. Handlers hold no shared mutable state; requests
/// are handled independently and a failure in one never affects another.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Liveness probe
        .route("/ping", get(handlers::ping))
        // Static crop price catalog
        .route("/crops", get(handlers::get_crops))
        // Weather provider proxy
        .route("/weather", get(handlers::get_weather))
        // Advisory chat proxy
        .route("/chat", post(handlers::post_chat))
}
