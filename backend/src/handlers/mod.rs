//! HTTP handlers for the City Weather backend

pub mod health;
pub mod hello;
pub mod history;
pub mod weather;

pub use health::health_check;
pub use hello::hello;
pub use history::get_history;
pub use weather::get_weather;
