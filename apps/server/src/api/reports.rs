use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState};
use leadfolio_core::filters::InteractionFilters;
use leadfolio_core::reports::{CampaignPerformance, NewTrackerEntry, RepActivity, TrackerEntry};

async fn rep_activity(
    State(state): State<Arc<AppState>>,
    filters: Option<Json<InteractionFilters>>,
) -> ApiResult<Json<Vec<RepActivity>>> {
    let filters = filters.map_or_else(InteractionFilters::default_window, |Json(f)| f);
    Ok(Json(state.reports_service.rep_activity(&filters)?))
}

async fn campaign_performance(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CampaignPerformance>>> {
    Ok(Json(state.reports_service.campaign_performance()?))
}

async fn list_tracker_entries(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<TrackerEntry>>> {
    Ok(Json(state.reports_service.get_tracker_entries()?))
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ImportResult {
    imported: usize,
}

/// Imports a batch of weekly tracker rows in one transaction.
async fn import_tracker_entries(
    State(state): State<Arc<AppState>>,
    Json(entries): Json<Vec<NewTrackerEntry>>,
) -> ApiResult<Json<ImportResult>> {
    let imported = state.reports_service.import_tracker_entries(entries).await?;
    Ok(Json(ImportResult { imported }))
}

/// The filtered interaction log as a CSV download.
async fn export_interactions(
    State(state): State<Arc<AppState>>,
    filters: Option<Json<InteractionFilters>>,
) -> ApiResult<impl IntoResponse> {
    let filters = filters.map_or_else(InteractionFilters::default_window, |Json(f)| f);
    let csv = state.reports_service.export_interactions_csv(&filters)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"interactions.csv\"",
            ),
        ],
        csv,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reports/rep-activity", post(rep_activity))
        .route("/reports/campaign-performance", get(campaign_performance))
        .route(
            "/reports/tracker",
            get(list_tracker_entries).post(import_tracker_entries),
        )
        .route("/reports/export/interactions", post(export_interactions))
}
