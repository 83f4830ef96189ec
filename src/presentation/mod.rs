// Presentation layer - HTTP routes
pub mod app_state;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    about, charts, health_check, list_choices, list_observations, list_warnings, refresh_warnings,
    submit_observation,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/about", get(about))
        .route("/sessions/:id/refresh", post(refresh_warnings))
        .route("/sessions/:id/choices", get(list_choices))
        .route("/sessions/:id/warnings", get(list_warnings))
        .route("/sessions/:id/charts", get(charts))
        .route(
            "/sessions/:id/observations",
            get(list_observations).post(submit_observation),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
