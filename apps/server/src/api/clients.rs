use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use leadfolio_core::clients::{Client, Contact, NewClient, NewContact};

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// Full client table, newest first; `?q=` applies the case-insensitive
/// substring search across name, sector, region, and location.
async fn list_clients(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Client>>> {
    let clients = match params.q.as_deref() {
        Some(query) => state.client_service.search_clients(query)?,
        None => state.client_service.get_clients()?,
    };
    Ok(Json(clients))
}

async fn create_client(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewClient>,
) -> ApiResult<Json<Client>> {
    let created = state.client_service.create_client(payload).await?;
    Ok(Json(created))
}

async fn get_client(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Client>> {
    Ok(Json(state.client_service.get_client(id)?))
}

async fn delete_client(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.client_service.delete_client(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_contacts(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Contact>>> {
    Ok(Json(state.client_service.get_contacts(id)?))
}

async fn add_contact(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(mut payload): Json<NewContact>,
) -> ApiResult<Json<Contact>> {
    payload.client_id = id;
    let created = state.client_service.add_contact(payload).await?;
    Ok(Json(created))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/clients", get(list_clients).post(create_client))
        .route("/clients/{id}", get(get_client).delete(delete_client))
        .route(
            "/clients/{id}/contacts",
            get(list_contacts).post(add_contact),
        )
}
