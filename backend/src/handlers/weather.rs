//! Weather lookup endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::models::WeatherResult;

use crate::error::AppResult;
use crate::AppState;

/// Query parameters for a weather lookup
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    /// Free-text city name; missing is treated the same as blank
    #[serde(default)]
    pub city: String,
}

/// `GET /api/weather?city=<name>`
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<WeatherResult>> {
    let result = state.lookup.lookup(&query.city).await?;
    Ok(Json(result))
}
