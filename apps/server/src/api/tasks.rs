use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use leadfolio_core::tasks::{NewTask, Task, TaskFilters};

async fn list_tasks(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Task>>> {
    Ok(Json(state.task_service.get_tasks(&TaskFilters::default())?))
}

async fn search_tasks(
    State(state): State<Arc<AppState>>,
    Json(filters): Json<TaskFilters>,
) -> ApiResult<Json<Vec<Task>>> {
    Ok(Json(state.task_service.get_tasks(&filters)?))
}

async fn list_overdue_tasks(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Task>>> {
    Ok(Json(state.task_service.get_overdue_tasks()?))
}

async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewTask>,
) -> ApiResult<Json<Task>> {
    let created = state.task_service.create_task(payload).await?;
    Ok(Json(created))
}

#[derive(Deserialize)]
struct StatusBody {
    status: String,
}

async fn update_task_status(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<StatusBody>,
) -> ApiResult<Json<Task>> {
    let updated = state.task_service.update_task_status(id, body.status).await?;
    Ok(Json(updated))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/search", post(search_tasks))
        .route("/tasks/overdue", get(list_overdue_tasks))
        .route("/tasks/{id}/status", put(update_task_status))
}
