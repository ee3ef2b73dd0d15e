use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Whether `SELECT 1` succeeded against the pool.
    pub db_healthy: bool,
}

/// GET /health -- service liveness plus database reachability.
///
/// Always answers 200; a dead database shows up as `"degraded"`.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = commute_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check could not reach the database");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount the health route at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
