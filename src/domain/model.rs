use serde::{Deserialize, Serialize};

/// Snapshot of the running service, returned by `GET /api/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerStatus {
    pub service: String,
    pub version: String,
    pub status: String,
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub cpu_percent: Option<f32>,
    pub memory_mb: Option<u64>,
    pub peak_memory_mb: Option<u64>,
}
