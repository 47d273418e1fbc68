use axum::{extract::State, http::HeaderMap, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ERR_INVALID_EXTENSION, ERR_INVALID_IMAGE_DATA, MAX_UPLOAD_SIZE_BYTES, WARN_UPLOAD_SIZE_BYTES,
};
use crate::error::{AppError, Result};
use crate::models::ClassificationRecord;
use crate::routes::validation::require_session;
use crate::security::base64_decode;
use crate::store::HistoryStore;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub filename: String,
    /// Optional base64 image payload; the default classifier never reads it
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub label: String,
    pub filename: String,
    #[serde(rename = "recordedAt")]
    pub recorded_at: String,
}

/// Classify an uploaded waste image and log the result
///
/// The filename must carry a supported image extension; the optional payload
/// must be valid base64 within the size cap. The label comes from whatever
/// strategy the state carries, and the event is appended to the caller's
/// history, charged against their upload limits.
pub async fn classify_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>> {
    let session = require_session(&state, &headers).await?;

    // 1. Check the filename looks like a supported image type
    if !ClassificationRecord::validate_filename(&payload.filename) {
        tracing::warn!(
            "Rejected upload with unsupported filename from {}: {}",
            session.username,
            payload.filename
        );
        return Err(AppError::InvalidInput(ERR_INVALID_EXTENSION.to_string()));
    }

    // 2. Decode the optional image payload and enforce the size cap
    let image_bytes = match &payload.data {
        Some(data) => Some(
            base64_decode(data)
                .map_err(|_| AppError::InvalidInput(ERR_INVALID_IMAGE_DATA.to_string()))?,
        ),
        None => None,
    };

    if let Some(bytes) = &image_bytes {
        if bytes.len() > MAX_UPLOAD_SIZE_BYTES {
            tracing::warn!(
                "Upload too large from {}: {} bytes (max: {})",
                session.username,
                bytes.len(),
                MAX_UPLOAD_SIZE_BYTES
            );
            return Err(AppError::PayloadTooLarge);
        }

        // Log warning for large uploads (monitoring)
        if bytes.len() > WARN_UPLOAD_SIZE_BYTES {
            tracing::info!(
                "Large upload from {}: {} bytes",
                session.username,
                bytes.len()
            );
        }
    }

    // 3. Assign a label through the configured strategy
    let label = state
        .classifier
        .classify(&payload.filename, image_bytes.as_deref());

    // 4. Append the event to the caller's history
    let record = ClassificationRecord {
        username: session.username,
        filename: payload.filename,
        label: label.as_str().to_string(),
        recorded_at: Utc::now().timestamp(),
    };

    let db = state.db.clone();
    let stored = record.clone();
    tokio::task::spawn_blocking(move || HistoryStore::new(db).record_upload(&stored)).await??;

    tracing::info!(
        "Classified {} for {}: {}",
        record.filename,
        record.username,
        record.label
    );

    Ok(Json(ClassifyResponse {
        label: record.label.clone(),
        filename: record.filename.clone(),
        recorded_at: record.formatted_timestamp(),
    }))
}
