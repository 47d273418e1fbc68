use axum::{extract::State, http::HeaderMap, Json};
use serde::Serialize;

use crate::error::Result;
use crate::routes::validation::require_session;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub username: String,
    pub message: String,
}

/// Landing screen payload for a logged-in user
pub async fn home(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<HomeResponse>> {
    let session = require_session(&state, &headers).await?;

    Ok(Json(HomeResponse {
        username: session.username,
        message: "Upload waste images for classification, review your history, \
                  and explore global plastic waste data."
            .to_string(),
    }))
}
