//! Error handling for the City Weather backend
//!
//! Every error renders as a JSON body of the form `{"error": "<message>"}`
//! with a status class matching the failure: user-correctable input problems
//! are 4xx, upstream provider problems are 502, storage problems are 5xx.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad or blank user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// The city name could not be resolved to a place
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Network failure, timeout, or non-success status from the provider
    #[error("Weather provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The provider answered with an unexpected shape
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// History persistence failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors outside the history store
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::CityNotFound(city) => {
                (StatusCode::NOT_FOUND, format!("No match found for \"{}\"", city))
            }
            AppError::ProviderUnavailable(msg) => (
                StatusCode::BAD_GATEWAY,
                format!("Weather provider unavailable: {}", msg),
            ),
            AppError::MalformedResponse(msg) => (
                StatusCode::BAD_GATEWAY,
                format!("Unexpected response from weather provider: {}", msg),
            ),
            AppError::Storage(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Storage error: {}", msg),
            ),
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A database error occurred".to_string(),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred".to_string(),
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
