//! HTTP handler for the weather proxy endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::external::WeatherClient;
use crate::AppState;

/// Fallback location when the caller supplies none
pub const DEFAULT_LOCATION: &str = "New York";

/// Query parameters for the weather proxy
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub location: Option<String>,
}

impl WeatherQuery {
    /// Resolve the effective location; absent or blank falls back to the
    /// fixed default.
    pub fn resolve_location(&self) -> &str {
        match self.location.as_deref() {
            Some(location) if !location.trim().is_empty() => location,
            _ => DEFAULT_LOCATION,
        }
    }
}

/// Proxy a 3-day forecast request to the weather provider
/// GET /api/weather?location=<string>
///
/// The provider body is relayed unmodified. A missing credential fails
/// before any outbound call is made.
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<Value>> {
    let weather = &state.config.weather;
    if weather.api_key.is_empty() {
        return Err(AppError::Configuration(
            "Weather API key not configured".to_string(),
        ));
    }

    let client = WeatherClient::new(
        state.http.clone(),
        weather.api_key.clone(),
        weather.api_endpoint.clone(),
    );
    let body = client.forecast(query.resolve_location()).await?;
    Ok(Json(body))
}
