//! Search history endpoint

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::HistoryEntry;
use crate::AppState;

/// `GET /api/history` — most recent searches, newest first
pub async fn get_history(State(state): State<AppState>) -> AppResult<Json<Vec<HistoryEntry>>> {
    let entries = state
        .history
        .list_recent(state.config.history.recent_limit)
        .await?;
    Ok(Json(entries))
}
