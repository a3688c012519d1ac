//! Liveness probe endpoint

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HelloResponse {
    pub message: String,
}

/// `GET /api/hello` — no business logic, kept as a liveness probe
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from the weather backend 🚀".to_string(),
    })
}
