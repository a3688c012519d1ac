//! Business logic services for the City Weather backend

pub mod history;
pub mod lookup;

pub use history::{HistoryEntry, HistoryStore, PgHistoryStore};
pub use lookup::LookupService;
