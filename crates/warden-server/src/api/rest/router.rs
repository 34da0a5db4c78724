//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/v1", get(service_info))
        .route("/v1/schema", get(schema))
        .route("/v1/actors", post(create_actor))
        .route("/v1/actors/:id", get(get_actor))
        .route("/v1/resources", post(create_resource))
        .route("/v1/resources/:id", get(get_resource))
        .route("/v1/decide", post(decide))
        .route("/v1/transactions", post(execute_transaction))
        .route("/v1/decisions", get(query_decisions))
        .route("/v1/decisions/statistics", get(decision_statistics))
        .route("/v1/decisions/export", get(export_decisions))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
