//! Route definitions for the City Weather backend

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(handlers::hello))
        .route("/weather", get(handlers::get_weather))
        .route("/history", get(handlers::get_history))
}
