//! Shared types for the City Weather demo
//!
//! This crate contains types shared between the backend and the browser
//! client (via WASM): weather wire models, the weather-code lookup table,
//! and city-input validation.

pub mod models;
pub mod validation;
pub mod weather_code;

pub use models::*;
pub use validation::*;
pub use weather_code::*;
