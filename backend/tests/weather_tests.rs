//! Weather proxy integration tests
//!
//! Exercises GET /api/weather against the real router, with a local
//! stand-in for the weather provider.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::RawQuery;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use farm_advisory_backend::config::{
    CatalogConfig, Config, OpenAiConfig, PingConfig, ServerConfig, WeatherConfig,
};
use farm_advisory_backend::{create_app, AppState};

fn test_config(api_key: &str, api_endpoint: &str) -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig::default(),
        ping: PingConfig {
            message: "ping".to_string(),
        },
        catalog: CatalogConfig {
            data_path: "data/crops.json".to_string(),
        },
        weather: WeatherConfig {
            api_endpoint: api_endpoint.to_string(),
            api_key: api_key.to_string(),
        },
        openai: OpenAiConfig {
            api_endpoint: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 500,
            temperature: 0.7,
        },
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn provider_body() -> Value {
    json!({
        "location": { "name": "New York", "region": "New York", "country": "USA" },
        "current": {
            "temp_c": 21.5,
            "condition": { "text": "Partly cloudy", "icon": "//cdn/icon.png" },
            "humidity": 62,
            "wind_kph": 14.0
        },
        "forecast": { "forecastday": [
            { "date": "2024-05-01", "day": { "maxtemp_c": 24.0, "mintemp_c": 15.0,
                "condition": { "text": "Sunny", "icon": "//cdn/sun.png" } } },
            { "date": "2024-05-02", "day": { "maxtemp_c": 22.0, "mintemp_c": 14.0,
                "condition": { "text": "Rain", "icon": "//cdn/rain.png" } } },
            { "date": "2024-05-03", "day": { "maxtemp_c": 25.0, "mintemp_c": 16.0,
                "condition": { "text": "Cloudy", "icon": "//cdn/cloud.png" } } }
        ] }
    })
}

/// Spawn a fake weather provider. Records the raw query string of every
/// forecast request.
async fn spawn_provider() -> (String, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();

    let provider = Router::new().route(
        "/forecast.json",
        get(move |RawQuery(query): RawQuery| {
            let recorder = recorder.clone();
            async move {
                recorder.lock().unwrap().push(query.unwrap_or_default());
                Json(provider_body())
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, provider).await.unwrap();
    });

    (format!("http://{}", addr), seen)
}

#[tokio::test]
async fn missing_credential_is_a_500_before_any_outbound_call() {
    let (endpoint, seen) = spawn_provider().await;
    let app = create_app(AppState::new(test_config("", &endpoint)));

    let response = app
        .oneshot(Request::builder().uri("/api/weather").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Weather API key not configured");
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn absent_location_defaults_to_new_york_in_the_outbound_request() {
    let (endpoint, seen) = spawn_provider().await;
    let app = create_app(AppState::new(test_config("test-key", &endpoint)));

    let response = app
        .oneshot(Request::builder().uri("/api/weather").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let queries = seen.lock().unwrap();
    assert_eq!(queries.len(), 1);
    let query = queries[0].replace("%20", " ");
    assert!(query.contains("q=New York"), "query was {query}");
    assert!(query.contains("days=3"));
    assert!(query.contains("aqi=no"));
    assert!(query.contains("alerts=no"));
}

#[tokio::test]
async fn explicit_location_is_forwarded() {
    let (endpoint, seen) = spawn_provider().await;
    let app = create_app(AppState::new(test_config("test-key", &endpoint)));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/weather?location=London")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(seen.lock().unwrap()[0].contains("q=London"));
}

#[tokio::test]
async fn provider_body_is_relayed_unmodified() {
    let (endpoint, _seen) = spawn_provider().await;
    let app = create_app(AppState::new(test_config("test-key", &endpoint)));

    let response = app
        .oneshot(Request::builder().uri("/api/weather").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, provider_body());
}

#[tokio::test]
async fn provider_failure_surfaces_as_upstream_error() {
    // Nothing is listening on this endpoint
    let app = create_app(AppState::new(test_config("test-key", "http://127.0.0.1:9")));

    let response = app
        .oneshot(Request::builder().uri("/api/weather").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to get weather response");
    assert!(body["details"].is_string());
}
