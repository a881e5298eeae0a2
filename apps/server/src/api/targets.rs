use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState};
use leadfolio_core::targets::{NewTarget, Target, TargetProgress};

async fn list_targets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Target>>> {
    Ok(Json(state.target_service.get_targets()?))
}

async fn list_user_targets(
    Path(user_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Target>>> {
    Ok(Json(state.target_service.get_targets_for_user(user_id)?))
}

/// Sets the single target row for (user, month, year), replacing any
/// previous values for that period.
async fn set_target(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewTarget>,
) -> ApiResult<Json<Target>> {
    let saved = state.target_service.set_target(payload).await?;
    Ok(Json(saved))
}

async fn user_target_progress(
    Path(user_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<TargetProgress>>> {
    Ok(Json(state.target_service.get_progress_for_user(user_id)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/targets", get(list_targets).put(set_target))
        .route("/targets/user/{id}", get(list_user_targets))
        .route("/targets/user/{id}/progress", get(user_target_progress))
}
