//! WebAssembly module for the City Weather client
//!
//! Provides the browser UI's pure helpers:
//! - Weather-code → description/icon lookup
//! - City input validation (mirrors the backend check)
//! - Forecast date formatting

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;
pub use shared::weather_code::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Human-readable description for a provider weather code
#[wasm_bindgen]
pub fn weather_description(code: i32) -> String {
    weather_info(code).description.to_string()
}

/// Display icon for a provider weather code
#[wasm_bindgen]
pub fn weather_icon(code: i32) -> String {
    weather_info(code).icon.to_string()
}

/// Whether a city input would pass backend validation
///
/// Used to disable the submit button before a doomed request is sent.
#[wasm_bindgen]
pub fn is_valid_city_input(input: &str) -> bool {
    validate_city_name(input).is_ok()
}

/// Format a forecast date ("2026-08-05") for display ("Wed, Aug 5")
///
/// Unparseable input is returned unchanged so the grid still renders.
#[wasm_bindgen]
pub fn format_forecast_date(date: &str) -> String {
    match date.parse::<NaiveDate>() {
        Ok(d) => d.format("%a, %b %-d").to_string(),
        Err(_) => date.to_string(),
    }
}

/// One-line summary of current conditions from a `WeatherResult` JSON
///
/// Example: "21.4°C, Partly cloudy, wind 12.3 km/h"
#[wasm_bindgen]
pub fn describe_current(result_json: &str) -> Result<String, JsValue> {
    let result: WeatherResult = serde_json::from_str(result_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid weather result JSON: {}", e)))?;

    let info = weather_info(result.current.weathercode);
    Ok(format!(
        "{}°C, {}, wind {} km/h",
        result.current.temperature, info.description, result.current.windspeed
    ))
}
