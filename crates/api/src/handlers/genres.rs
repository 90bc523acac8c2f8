//! Handlers for the read-only `/genre` resource.

use axum::extract::State;
use axum::Json;
use gamestore_core::dto::GenreDto;
use gamestore_db::repositories::GenreRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /genre
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<GenreDto>>> {
    let genres = GenreRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(GenreDto::from)
        .collect();
    Ok(Json(genres))
}
