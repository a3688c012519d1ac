//! Configuration management for the City Weather backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CW_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Weather provider configuration
    pub provider: ProviderConfig,

    /// Search history configuration
    pub history: HistoryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Geocoding API base URL
    pub geocoding_url: String,

    /// Forecast API base URL
    pub forecast_url: String,

    /// Outbound request timeout in seconds
    pub timeout_secs: u64,

    /// Number of forecast days to request
    pub forecast_days: u8,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HistoryConfig {
    /// Maximum number of entries returned by the history endpoint
    pub recent_limit: i64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("CW_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 4000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default(
                "provider.geocoding_url",
                "https://geocoding-api.open-meteo.com/v1/search",
            )?
            .set_default(
                "provider.forecast_url",
                "https://api.open-meteo.com/v1/forecast",
            )?
            .set_default("provider.timeout_secs", 10)?
            .set_default("provider.forecast_days", 3)?
            .set_default("history.recent_limit", 20)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CW_ prefix)
            .add_source(
                Environment::with_prefix("CW")
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
            port: 4000,
            host: "0.0.0.0".to_string(),
        }
    }
}
