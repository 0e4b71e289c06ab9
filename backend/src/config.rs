//! Configuration management for the Farm Advisory Dashboard
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FAD_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Liveness probe configuration
    pub ping: PingConfig,

    /// Crop catalog configuration
    pub catalog: CatalogConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,

    /// AI chat provider configuration
    pub openai: OpenAiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PingConfig {
    /// Message returned by GET /api/ping
    pub message: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Path to the bundled crop price dataset
    pub data_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key. Empty means unconfigured; checked per request,
    /// not at startup.
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OpenAiConfig {
    /// Chat completions endpoint
    pub api_endpoint: String,

    /// API key. Empty means unconfigured; checked per request.
    pub api_key: String,

    /// Model identifier
    pub model: String,

    /// Output length cap per completion
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("FAD_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("ping.message", "ping")?
            .set_default("catalog.data_path", "data/crops.json")?
            .set_default("weather.api_endpoint", "http://api.weatherapi.com/v1")?
            .set_default("weather.api_key", "")?
            .set_default("openai.api_endpoint", "https://api.openai.com/v1")?
            .set_default("openai.api_key", "")?
            .set_default("openai.model", "gpt-3.5-turbo")?
            .set_default("openai.max_tokens", 500)?
            .set_default("openai.temperature", 0.7)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FAD_ prefix)
            .add_source(
                Environment::with_prefix("FAD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
