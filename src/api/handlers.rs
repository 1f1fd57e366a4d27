use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::Json;

use crate::core::math::MathService;
use crate::domain::model::ServerStatus;
use crate::utils::monitor::SystemMonitor;

use super::error::ApiResult;

/// GET /api/math/prime/{n}
///
/// Never fails: every integer, including negatives, has a defined answer.
pub async fn check_prime(
    Extension(svc): Extension<Arc<MathService>>,
    Path(n): Path<i64>,
) -> Json<bool> {
    let prime = svc.is_prime(n);
    tracing::debug!("is_prime({}) = {}", n, prime);
    Json(prime)
}

/// GET /api/math/factorial/{n}
///
/// Negative input propagates as InvalidArgument (400); a result past 20!
/// propagates as Overflow (422).
pub async fn compute_factorial(
    Extension(svc): Extension<Arc<MathService>>,
    Path(n): Path<i64>,
) -> ApiResult<Json<u64>> {
    let value = svc.factorial(n)?;
    tracing::debug!("factorial({}) = {}", n, value);
    Ok(Json(value))
}

/// GET /api/health
pub async fn health_check() -> &'static str {
    "ok"
}

/// GET /api/status
pub async fn server_status(
    Extension(monitor): Extension<Arc<SystemMonitor>>,
) -> Json<ServerStatus> {
    let stats = monitor.get_stats();

    Json(ServerStatus {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime_seconds: monitor.elapsed().as_secs(),
        cpu_percent: stats.as_ref().map(|s| s.cpu_usage),
        memory_mb: stats.as_ref().map(|s| s.memory_usage_mb),
        peak_memory_mb: stats.as_ref().map(|s| s.peak_memory_mb),
    })
}
