use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use leadfolio_core::meetings::{Meeting, NewMeeting};

async fn list_meetings(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Meeting>>> {
    Ok(Json(state.meeting_service.get_meetings()?))
}

async fn list_client_meetings(
    Path(client_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Meeting>>> {
    Ok(Json(state.meeting_service.get_meetings_for_client(client_id)?))
}

async fn schedule_meeting(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewMeeting>,
) -> ApiResult<Json<Meeting>> {
    let created = state.meeting_service.schedule_meeting(payload).await?;
    Ok(Json(created))
}

#[derive(Deserialize)]
struct StatusBody {
    status: String,
}

async fn update_meeting_status(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<StatusBody>,
) -> ApiResult<Json<Meeting>> {
    let updated = state
        .meeting_service
        .update_meeting_status(id, body.status)
        .await?;
    Ok(Json(updated))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/meetings", get(list_meetings).post(schedule_meeting))
        .route("/meetings/client/{id}", get(list_client_meetings))
        .route("/meetings/{id}/status", put(update_meeting_status))
}
