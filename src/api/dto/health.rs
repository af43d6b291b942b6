//! DTOs for health check endpoint.

use serde::Serialize;

/// Liveness payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Unix timestamp (seconds) at which the check ran.
    pub timestamp: i64,
    pub service: String,
    pub version: String,
}
