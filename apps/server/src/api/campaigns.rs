use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use leadfolio_core::campaigns::{Campaign, Lead, LeadFilters, NewCampaign, NewLead};

async fn list_campaigns(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Campaign>>> {
    Ok(Json(state.campaign_service.get_campaigns()?))
}

async fn create_campaign(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewCampaign>,
) -> ApiResult<Json<Campaign>> {
    let created = state.campaign_service.create_campaign(payload).await?;
    Ok(Json(created))
}

async fn list_leads(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Lead>>> {
    Ok(Json(state.lead_service.get_leads(&LeadFilters::default())?))
}

/// Filtered lead listing; empty filter members constrain nothing.
async fn search_leads(
    State(state): State<Arc<AppState>>,
    Json(filters): Json<LeadFilters>,
) -> ApiResult<Json<Vec<Lead>>> {
    Ok(Json(state.lead_service.get_leads(&filters)?))
}

async fn create_lead(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewLead>,
) -> ApiResult<Json<Lead>> {
    let created = state.lead_service.create_lead(payload).await?;
    Ok(Json(created))
}

#[derive(Deserialize)]
struct StageBody {
    stage: String,
}

async fn update_lead_stage(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<StageBody>,
) -> ApiResult<Json<Lead>> {
    let updated = state.lead_service.update_lead_stage(id, body.stage).await?;
    Ok(Json(updated))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/campaigns", get(list_campaigns).post(create_campaign))
        .route("/leads", get(list_leads).post(create_lead))
        .route("/leads/search", post(search_leads))
        .route("/leads/{id}/stage", put(update_lead_stage))
}
