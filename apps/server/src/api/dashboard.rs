use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use crate::{error::ApiResult, main_lib::AppState};
use leadfolio_core::dashboard::Dashboard;
use leadfolio_core::filters::InteractionFilters;

/// The full dashboard payload for a filter set. With no body, the sidebar
/// default window (last 60 days through today) applies.
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    filters: Option<Json<InteractionFilters>>,
) -> ApiResult<Json<Dashboard>> {
    let filters = filters.map_or_else(InteractionFilters::default_window, |Json(f)| f);
    Ok(Json(state.dashboard_service.get_dashboard(&filters)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", post(get_dashboard))
}
