//! Weather API client
//!
//! Integrates with WeatherAPI.com for current conditions plus a 3-day
//! forecast. The response body is relayed to the caller unmodified.

use reqwest::Client;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Forecast days requested per call; the dashboard renders at most three.
const FORECAST_DAYS: u8 = 3;

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Build the outbound forecast URL: 3 days, no air quality, no alerts.
    fn forecast_url(&self, location: &str) -> String {
        format!(
            "{}/forecast.json?key={}&q={}&days={}&aqi=no&alerts=no",
            self.base_url, self.api_key, location, FORECAST_DAYS
        )
    }

    /// Fetch the forecast for a location. One outbound call, no retries,
    /// no caching; the provider JSON is passed through untouched.
    pub async fn forecast(&self, location: &str) -> AppResult<Value> {
        let response = self
            .client
            .get(self.forecast_url(location))
            .send()
            .await
            .map_err(|e| {
                AppError::upstream("weather", None, format!("Weather API request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Weather API returned {} for location {:?}", status, location);
            return Err(AppError::upstream(
                "weather",
                Some(status.as_u16()),
                format!("Weather API returned {}", status.as_u16()),
            ));
        }

        response.json().await.map_err(|e| {
            AppError::upstream(
                "weather",
                None,
                format!("Failed to parse weather response: {}", e),
            )
        })
    }
}
