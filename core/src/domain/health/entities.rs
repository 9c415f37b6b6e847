use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Readiness probe result for one logical database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub database: String,
    pub healthy: bool,
    pub latency_ms: u64,
}

impl DatabaseHealthStatus {
    pub fn healthy(database: &str, latency_ms: u64) -> Self {
        Self {
            database: database.to_string(),
            healthy: true,
            latency_ms,
        }
    }

    pub fn unhealthy(database: &str, latency_ms: u64) -> Self {
        Self {
            database: database.to_string(),
            healthy: false,
            latency_ms,
        }
    }
}
