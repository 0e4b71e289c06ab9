//! Weather view models
//!
//! The backend relays the weather provider's JSON body unmodified; these
//! types describe only the fields the dashboard reads. Extra provider
//! fields are ignored on deserialization.

use serde::{Deserialize, Serialize};

/// The slice of the provider response rendered by the weather card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherView {
    pub location: WeatherLocation,
    pub current: CurrentConditions,
    pub forecast: Forecast,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherLocation {
    pub name: String,
    pub region: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub condition: WeatherCondition,
    /// Relative humidity, 0-100
    pub humidity: i32,
    pub wind_kph: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub text: String,
    /// Icon URL as supplied by the provider
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Calendar date string, provider ordering preserved
    pub date: String,
    pub day: DaySummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySummary {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub condition: WeatherCondition,
}

impl WeatherView {
    /// The dashboard renders at most the first three forecast days,
    /// in whatever order the provider returned them.
    pub fn forecast_days(&self) -> &[ForecastDay] {
        let n = self.forecast.forecastday.len().min(3);
        &self.forecast.forecastday[..n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_provider_shape_ignoring_extras() {
        let body = serde_json::json!({
            "location": { "name": "New York", "region": "New York", "country": "USA", "lat": 40.71 },
            "current": {
                "temp_c": 21.5,
                "condition": { "text": "Partly cloudy", "icon": "//cdn/icon.png", "code": 1003 },
                "humidity": 62,
                "wind_kph": 14.0,
                "uv": 5.0
            },
            "forecast": {
                "forecastday": [
                    { "date": "2024-05-01", "day": { "maxtemp_c": 24.0, "mintemp_c": 15.0,
                        "condition": { "text": "Sunny", "icon": "//cdn/sun.png" }, "avghumidity": 55 } }
                ]
            }
        });

        let view: WeatherView = serde_json::from_value(body).unwrap();
        assert_eq!(view.location.name, "New York");
        assert_eq!(view.current.humidity, 62);
        assert_eq!(view.forecast_days().len(), 1);
    }

    #[test]
    fn forecast_days_caps_at_three() {
        let day = ForecastDay {
            date: "2024-05-01".to_string(),
            day: DaySummary {
                maxtemp_c: 20.0,
                mintemp_c: 10.0,
                condition: WeatherCondition {
                    text: "Sunny".to_string(),
                    icon: String::new(),
                },
            },
        };
        let view = WeatherView {
            location: WeatherLocation {
                name: String::new(),
                region: String::new(),
                country: String::new(),
            },
            current: CurrentConditions {
                temp_c: 0.0,
                condition: WeatherCondition {
                    text: String::new(),
                    icon: String::new(),
                },
                humidity: 0,
                wind_kph: 0.0,
            },
            forecast: Forecast {
                forecastday: vec![day.clone(), day.clone(), day.clone(), day.clone(), day],
            },
        };
        assert_eq!(view.forecast_days().len(), 3);
    }
}
