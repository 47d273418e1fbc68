use axum::{extract::State, http::HeaderMap, Json};
use serde::Serialize;

use crate::error::Result;
use crate::routes::validation::require_session;
use crate::store::HistoryStore;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub filename: String,
    pub label: String,
    #[serde(rename = "recordedAt")]
    pub recorded_at: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub username: String,
    pub entries: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct ClearHistoryResponse {
    pub success: bool,
    pub removed: usize,
}

/// Classification history for the logged-in user
///
/// Returns exactly the caller's records, in the order they were written.
pub async fn get_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<HistoryResponse>> {
    let session = require_session(&state, &headers).await?;

    let db = state.db.clone();
    let username = session.username.clone();
    let records =
        tokio::task::spawn_blocking(move || HistoryStore::new(db).for_user(&username)).await??;

    let entries = records
        .iter()
        .map(|r| HistoryEntry {
            filename: r.filename.clone(),
            label: r.label.clone(),
            recorded_at: r.formatted_timestamp(),
        })
        .collect();

    Ok(Json(HistoryResponse {
        username: session.username,
        entries,
    }))
}

/// Clear the logged-in user's history
///
/// Removes only the caller's records; everyone else's are untouched.
pub async fn clear_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ClearHistoryResponse>> {
    let session = require_session(&state, &headers).await?;

    let db = state.db.clone();
    let username = session.username;
    let removed =
        tokio::task::spawn_blocking(move || HistoryStore::new(db).clear_user(&username)).await??;

    Ok(Json(ClearHistoryResponse {
        success: true,
        removed,
    }))
}
