//! Liveness and readiness of the game store.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use gamestore_db::repositories::GenreRepo;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the store can serve every endpoint, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether the seeded genre catalog is present. Games cannot be created
    /// without it.
    pub genres_seeded: bool,
}

impl HealthReport {
    fn new(db_healthy: bool, genres_seeded: bool) -> Self {
        Self {
            status: if db_healthy && genres_seeded { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            genres_seeded,
        }
    }
}

/// Always answers `200`; callers read `status` to decide readiness.
async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = gamestore_db::health_check(&state.pool).await.is_ok();
    let genres_seeded = db_healthy
        && matches!(GenreRepo::count(&state.pool).await, Ok(count) if count > 0);

    if !db_healthy || !genres_seeded {
        tracing::warn!(db_healthy, genres_seeded, "Game store degraded");
    }

    Json(HealthReport::new(db_healthy, genres_seeded))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
