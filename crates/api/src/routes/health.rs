//! Liveness endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

/// GET /health
///
/// Reports process liveness plus a database round trip. Answers 200
/// even when the probe fails so an orchestrator can tell "process up,
/// dependency down" apart from "process down".
async fn health(State(state): State<AppState>) -> Json<Health> {
    let db_healthy = backoffice_db::health_check(&state.pool).await.is_ok();
    Json(Health {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mounted at the root, outside the `/api/v1` tree.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
