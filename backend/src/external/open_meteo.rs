//! Open-Meteo API client for geocoding and forecasts
//!
//! Two calls per lookup: the geocoding API resolves a free-text city name to
//! a canonical place, the forecast API returns current conditions and a
//! multi-day forecast for its coordinates. Both are single-shot with a
//! bounded timeout; no retries.

use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;

use shared::models::{CurrentConditions, ForecastDay, WeatherResult};

use crate::config::ProviderConfig;
use crate::error::{AppError, AppResult};
use crate::external::WeatherProvider;

/// Open-Meteo client
#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    geocoding_url: String,
    forecast_url: String,
    forecast_days: u8,
}

/// Geocoding API response
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    /// Absent entirely when nothing matches
    results: Option<Vec<GeoPlace>>,
}

/// A resolved place from the geocoding API
#[derive(Debug, Deserialize)]
struct GeoPlace {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

/// Forecast API response (unix timestamps)
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    utc_offset_seconds: i64,
    current_weather: CurrentWeatherBlock,
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherBlock {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
    time: i64,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<i64>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    weathercode: Vec<i32>,
}

impl OpenMeteoClient {
    /// Create a new client with the configured endpoints and timeout
    pub fn new(config: &ProviderConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            geocoding_url: config.geocoding_url.clone(),
            forecast_url: config.forecast_url.clone(),
            forecast_days: config.forecast_days,
        })
    }

    /// Resolve a city name to a canonical place
    async fn geocode(&self, city: &str) -> AppResult<GeoPlace> {
        let response = self
            .client
            .get(&self.geocoding_url)
            .query(&[("name", city), ("count", "1"), ("format", "json")])
            .send()
            .await
            .map_err(|e| AppError::ProviderUnavailable(format!("geocoding request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ProviderUnavailable(format!(
                "geocoding API returned {}",
                response.status()
            )));
        }

        let data: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(format!("geocoding response: {}", e)))?;

        data.results
            .and_then(|mut places| if places.is_empty() { None } else { Some(places.remove(0)) })
            .ok_or_else(|| AppError::CityNotFound(city.to_string()))
    }

    /// Fetch current conditions and the daily forecast for coordinates
    async fn fetch_forecast(&self, latitude: f64, longitude: f64) -> AppResult<ForecastResponse> {
        let params = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current_weather", "true".to_string()),
            (
                "daily",
                "temperature_2m_max,temperature_2m_min,weathercode".to_string(),
            ),
            ("timezone", "auto".to_string()),
            ("timeformat", "unixtime".to_string()),
            ("forecast_days", self.forecast_days.to_string()),
        ];

        let response = self
            .client
            .get(&self.forecast_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| AppError::ProviderUnavailable(format!("forecast request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ProviderUnavailable(format!(
                "forecast API returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(format!("forecast response: {}", e)))
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn resolve_and_fetch(&self, city: &str) -> AppResult<WeatherResult> {
        let place = self.geocode(city).await?;
        let forecast = self.fetch_forecast(place.latitude, place.longitude).await?;
        convert_response(place, forecast)
    }
}

/// Convert the provider responses into the wire result
///
/// Daily arrays are parallel; a length mismatch means the response cannot be
/// interpreted and is rejected rather than truncated. Forecast order follows
/// the provider's (chronological).
fn convert_response(place: GeoPlace, data: ForecastResponse) -> AppResult<WeatherResult> {
    let time = DateTime::from_timestamp(data.current_weather.time, 0)
        .ok_or_else(|| AppError::MalformedResponse("invalid observation timestamp".to_string()))?;

    let current = CurrentConditions {
        temperature: data.current_weather.temperature,
        windspeed: data.current_weather.windspeed,
        weathercode: data.current_weather.weathercode,
        time,
    };

    let daily = &data.daily;
    if daily.temperature_2m_max.len() != daily.time.len()
        || daily.temperature_2m_min.len() != daily.time.len()
        || daily.weathercode.len() != daily.time.len()
    {
        return Err(AppError::MalformedResponse(
            "daily forecast arrays have mismatched lengths".to_string(),
        ));
    }

    let mut forecast = Vec::with_capacity(daily.time.len());
    for (i, &ts) in daily.time.iter().enumerate() {
        // Daily timestamps are local midnight; shift by the location's UTC
        // offset to recover the local calendar date.
        let date = DateTime::from_timestamp(ts + data.utc_offset_seconds, 0)
            .ok_or_else(|| AppError::MalformedResponse("invalid forecast date".to_string()))?
            .date_naive();

        forecast.push(ForecastDay {
            date,
            temp_max: daily.temperature_2m_max[i],
            temp_min: daily.temperature_2m_min[i],
            weathercode: daily.weathercode[i],
        });
    }

    Ok(WeatherResult {
        city: place.name,
        country: place.country.unwrap_or_default(),
        current,
        forecast,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_place() -> GeoPlace {
        GeoPlace {
            name: "Paris".to_string(),
            latitude: 48.8566,
            longitude: 2.3522,
            country: Some("France".to_string()),
        }
    }

    fn sample_forecast() -> ForecastResponse {
        ForecastResponse {
            utc_offset_seconds: 7200,
            current_weather: CurrentWeatherBlock {
                temperature: 21.4,
                windspeed: 12.3,
                weathercode: 2,
                time: 1_722_855_600,
            },
            daily: DailyBlock {
                // Local midnights of three consecutive days
                time: vec![1_722_808_800, 1_722_895_200, 1_722_981_600],
                temperature_2m_max: vec![24.1, 22.8, 25.0],
                temperature_2m_min: vec![14.3, 13.9, 15.2],
                weathercode: vec![3, 61, 0],
            },
        }
    }

    #[test]
    fn test_convert_preserves_forecast_order_and_length() {
        let result = convert_response(sample_place(), sample_forecast()).unwrap();

        assert_eq!(result.city, "Paris");
        assert_eq!(result.country, "France");
        assert_eq!(result.forecast.len(), 3);
        assert_eq!(result.current.weathercode, 2);

        // Chronological order preserved from the provider
        for pair in result.forecast.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        assert_eq!(
            result.forecast.iter().map(|d| d.weathercode).collect::<Vec<_>>(),
            vec![3, 61, 0]
        );
    }

    #[test]
    fn test_convert_rejects_mismatched_daily_arrays() {
        let mut data = sample_forecast();
        data.daily.temperature_2m_min.pop();

        let err = convert_response(sample_place(), data).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn test_convert_defaults_missing_country() {
        let mut place = sample_place();
        place.country = None;

        let result = convert_response(place, sample_forecast()).unwrap();
        assert_eq!(result.country, "");
    }

    #[test]
    fn test_geocoding_response_without_results_key() {
        let parsed: GeocodingResponse = serde_json::from_str("{\"generationtime_ms\":0.5}").unwrap();
        assert!(parsed.results.is_none());
    }
}
