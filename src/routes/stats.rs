use axum::{extract::State, http::HeaderMap, Json};
use serde::Serialize;

use crate::error::Result;
use crate::models::CountryStatRecord;
use crate::routes::validation::require_session;
use crate::store::CountryStatStore;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct MapMarker {
    pub country: String,
    #[serde(rename = "wasteTons")]
    pub waste_tons: u64,
    #[serde(rename = "recyclingRatePct")]
    pub recycling_rate_pct: u32,
    pub latitude: f64,
    pub longitude: f64,
    /// green above 50% recycling, red otherwise
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct MapResponse {
    pub markers: Vec<MapMarker>,
}

#[derive(Debug, Serialize)]
pub struct DashboardRow {
    pub country: String,
    #[serde(rename = "wasteTons")]
    pub waste_tons: u64,
    #[serde(rename = "recyclingRatePct")]
    pub recycling_rate_pct: u32,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub rows: Vec<DashboardRow>,
}

async fn all_stats(state: &AppState) -> Result<Vec<CountryStatRecord>> {
    let db = state.db.clone();
    tokio::task::spawn_blocking(move || CountryStatStore::new(db).all()).await?
}

/// Marker data for the global waste map
pub async fn map_markers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MapResponse>> {
    require_session(&state, &headers).await?;

    let markers = all_stats(&state)
        .await?
        .into_iter()
        .map(|stat| MapMarker {
            color: stat.marker_color().to_string(),
            country: stat.country,
            waste_tons: stat.waste_tons,
            recycling_rate_pct: stat.recycling_rate_pct,
            latitude: stat.latitude,
            longitude: stat.longitude,
        })
        .collect();

    Ok(Json(MapResponse { markers }))
}

/// Per-country series for the dashboard bar chart
pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DashboardResponse>> {
    require_session(&state, &headers).await?;

    let rows = all_stats(&state)
        .await?
        .into_iter()
        .map(|stat| DashboardRow {
            country: stat.country,
            waste_tons: stat.waste_tons,
            recycling_rate_pct: stat.recycling_rate_pct,
        })
        .collect();

    Ok(Json(DashboardResponse { rows }))
}
