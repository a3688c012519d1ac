//! External API integrations

pub mod open_meteo;

use async_trait::async_trait;
use shared::models::WeatherResult;

use crate::error::AppResult;

pub use open_meteo::OpenMeteoClient;

/// Resolves a free-text city name and fetches its weather
///
/// Object-safe so the lookup service can be exercised against a test double.
/// Callers are responsible for validating the city name first; implementations
/// may assume it is non-blank.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn resolve_and_fetch(&self, city: &str) -> AppResult<WeatherResult>;
}
