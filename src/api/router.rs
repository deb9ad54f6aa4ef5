use crate::api::{
    cards_handler, health_handler, report_handler, result_handler, run_analysis_handler,
};
use crate::models::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/analyze", get(run_analysis_handler))
        .route("/result", get(result_handler))
        .route("/report", get(report_handler))
        .route("/cards", get(cards_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
