use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use crate::{error::ApiResult, main_lib::AppState};
use leadfolio_core::filters::InteractionFilters;
use leadfolio_core::interactions::{InteractionWithClient, NewInteraction};

/// Filtered interaction log. With no body, the sidebar default window
/// (last 60 days through today) applies.
async fn search_interactions(
    State(state): State<Arc<AppState>>,
    filters: Option<Json<InteractionFilters>>,
) -> ApiResult<Json<Vec<InteractionWithClient>>> {
    let filters = filters.map_or_else(InteractionFilters::default_window, |Json(f)| f);
    Ok(Json(state.interaction_service.get_interactions(&filters)?))
}

async fn log_interaction(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewInteraction>,
) -> ApiResult<Json<InteractionWithClient>> {
    let created = state.interaction_service.log_interaction(payload).await?;
    Ok(Json(created))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/interactions", post(log_interaction))
        .route("/interactions/search", post(search_interactions))
}
