use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::core::math::MathService;
use crate::utils::monitor::SystemMonitor;

use super::handlers;

pub fn build_router(service: Arc<MathService>, monitor: Arc<SystemMonitor>) -> Router {
    Router::new()
        .route("/api/math/prime/{n}", get(handlers::check_prime))
        .route("/api/math/factorial/{n}", get(handlers::compute_factorial))
        .route("/api/health", get(handlers::health_check))
        .route("/api/status", get(handlers::server_status))
        .layer(Extension(service))
        .layer(Extension(monitor))
        .layer(TraceLayer::new_for_http())
}
