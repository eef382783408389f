//! Liveness response type.

use serde::Serialize;

/// Response for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always "ok" while the server answers.
    pub status: &'static str,
    /// Number of recipes currently stored.
    pub recipes: usize,
}
