//! Weather lookup result models
//!
//! These are the JSON shapes returned by `GET /api/weather` and consumed by
//! the browser client. Weather codes are integers as defined by the upstream
//! provider; interpretation happens client-side (see [`crate::weather_code`]).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions at the resolved place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Air temperature in °C
    pub temperature: f64,
    /// Wind speed in km/h
    pub windspeed: f64,
    /// Provider-defined condition code, passed through unmodified
    pub weathercode: i32,
    /// Observation timestamp
    pub time: DateTime<Utc>,
}

/// One day of the forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub temp_max: f64,
    pub temp_min: f64,
    pub weathercode: i32,
}

/// Combined result of one weather lookup
///
/// `forecast` is chronological and matches the provider's returned day count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub city: String,
    pub country: String,
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}
