//! Liveness handler.

use axum::extract::State;
use axum::Json;

use crate::schema::health::HealthResponse;
use crate::state::AppState;

/// Reports that the server is up and how many recipes it holds.
///
/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let recipes = state.service.read().await.recipe_count();
    Json(HealthResponse {
        status: "ok",
        recipes,
    })
}
