//! API surface: one router per navigation page, assembled behind the
//! session-auth middleware.

pub mod campaigns;
pub mod clients;
pub mod dashboard;
pub mod interactions;
pub mod meetings;
pub mod reports;
pub mod targets;
pub mod tasks;
pub mod users;

use std::sync::Arc;

use axum::{middleware, routing::get, routing::post, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{auth, config::Config, main_lib::AppState};

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn readyz() -> &'static str {
    "ok"
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let public = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/auth/login", post(auth::login))
        .route("/auth/status", get(auth::auth_status));

    let protected = Router::new()
        .merge(clients::router())
        .merge(campaigns::router())
        .merge(interactions::router())
        .merge(meetings::router())
        .merge(tasks::router())
        .merge(targets::router())
        .merge(dashboard::router())
        .merge(reports::router())
        .merge(users::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_jwt,
        ));

    Router::new()
        .nest("/api/v1", public.merge(protected))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
