//! Weather lookup orchestration
//!
//! Validates the city name, delegates to the provider, and records the
//! result in search history. History is best-effort: an append failure is
//! logged and swallowed, so a user always gets their weather even when
//! history recording breaks.

use std::sync::Arc;

use chrono::Utc;
use shared::models::WeatherResult;
use shared::validation::validate_city_name;

use crate::error::{AppError, AppResult};
use crate::external::WeatherProvider;
use crate::services::history::{HistoryEntry, HistoryStore};

/// Orchestrates one end-to-end weather lookup
#[derive(Clone)]
pub struct LookupService {
    provider: Arc<dyn WeatherProvider>,
    history: Arc<dyn HistoryStore>,
}

impl LookupService {
    pub fn new(provider: Arc<dyn WeatherProvider>, history: Arc<dyn HistoryStore>) -> Self {
        Self { provider, history }
    }

    /// Run one lookup: validate → resolve → fetch → record → return
    ///
    /// Provider errors propagate unchanged. A history append failure does
    /// not fail the lookup.
    pub async fn lookup(&self, city: &str) -> AppResult<WeatherResult> {
        let city = validate_city_name(city).map_err(|msg| AppError::Validation(msg.to_string()))?;

        let result = self.provider.resolve_and_fetch(city).await?;

        let entry = HistoryEntry {
            city: result.city.clone(),
            country: result.country.clone(),
            temperature: result.current.temperature,
            created_at: Utc::now(),
        };

        if let Err(e) = self.history.append(&entry).await {
            tracing::warn!("Failed to record search history for {}: {}", entry.city, e);
        }

        Ok(result)
    }
}
