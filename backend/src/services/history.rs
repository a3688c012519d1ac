//! Append-only search history store
//!
//! Every successful lookup appends one flattened record. There are no update
//! or delete operations; retention is unbounded and the read side is capped
//! by the caller's limit. Concurrent appends are serialized by single-row
//! inserts, so entries are never lost or interleaved mid-write.
//!
//! Append failures surface as [`AppError::Storage`] so the lookup service can
//! swallow them; read failures propagate as database errors.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};

/// One recorded lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct HistoryEntry {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub created_at: DateTime<Utc>,
}

/// Persistence seam for search history
///
/// Injected into the lookup service so tests can substitute a double.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append one entry. Persistence failures surface as [`AppError::Storage`].
    async fn append(&self, entry: &HistoryEntry) -> AppResult<()>;

    /// Return the most recent entries, newest first. Empty when no rows exist.
    async fn list_recent(&self, limit: i64) -> AppResult<Vec<HistoryEntry>>;
}

/// Postgres-backed history store
#[derive(Clone)]
pub struct PgHistoryStore {
    db: PgPool,
}

impl PgHistoryStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn append(&self, entry: &HistoryEntry) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO search_history (city, country, temperature, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&entry.city)
        .bind(&entry.country)
        .bind(entry.temperature)
        .bind(entry.created_at)
        .execute(&self.db)
        .await
        .map_err(|e| AppError::Storage(format!("failed to append history entry: {}", e)))?;

        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> AppResult<Vec<HistoryEntry>> {
        let entries = sqlx::query_as::<_, HistoryEntry>(
            r#"
            SELECT city, country, temperature, created_at
            FROM search_history
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }
}
