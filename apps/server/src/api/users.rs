use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::{
    auth::SessionContext,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use leadfolio_core::users::{NewUser, User};
use leadfolio_storage_sqlite::db;

async fn list_users(
    State(state): State<Arc<AppState>>,
    ctx: SessionContext,
) -> ApiResult<Json<Vec<User>>> {
    ctx.require_admin()?;
    Ok(Json(state.user_service.get_users()?))
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    ctx: SessionContext,
    Json(payload): Json<NewUser>,
) -> ApiResult<Json<User>> {
    ctx.require_admin()?;
    let created = state.user_service.create_user(payload).await?;
    Ok(Json(created))
}

/// Double confirmation for the irreversible reset: the button press
/// (`confirm`) and the explicit checkbox (`acknowledge_data_loss`) must both
/// be set before anything is dropped.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResetRequest {
    #[serde(default)]
    confirm: bool,
    #[serde(default)]
    acknowledge_data_loss: bool,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetResponse {
    reset: bool,
}

/// Destroys every table and recreates the schema from scratch, reseeding
/// the bootstrap account. Admin-only, irreversible.
async fn reset_database(
    State(state): State<Arc<AppState>>,
    ctx: SessionContext,
    Json(body): Json<ResetRequest>,
) -> ApiResult<Json<ResetResponse>> {
    ctx.require_admin()?;
    if !body.confirm || !body.acknowledge_data_loss {
        return Err(ApiError::BadRequest(
            "database reset requires both confirmation flags".to_string(),
        ));
    }

    tracing::warn!(
        "Database reset requested by '{}'",
        ctx.identity.username
    );
    db::reset_database(&state.pool)?;
    // Every cached read refers to the destroyed database.
    state.cache.invalidate_all();

    Ok(Json(ResetResponse { reset: true }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/admin/reset-database", post(reset_database))
}
