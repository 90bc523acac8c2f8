//! Handlers for the `/games` resource.
//!
//! Reads run against the pool. Each write opens one session and commits it
//! at most once; a session dropped on an error path is rolled back.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gamestore_core::dto::{CreateGame, GameDetails, GameSummary, UpdateGame};
use gamestore_core::error::CoreError;
use gamestore_core::types::DbId;
use gamestore_db::models::game::{Game, NewGame};
use gamestore_db::repositories::GameRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// Path a created game can be fetched back from.
pub fn game_location(id: DbId) -> String {
    format!("/games/{id}")
}

/// GET /games
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<GameSummary>>> {
    let games = GameRepo::list_summaries(&state.pool)
        .await?
        .into_iter()
        .map(GameSummary::from)
        .collect();
    Ok(Json(games))
}

/// GET /games/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GameDetails>> {
    let game = GameRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Game", id }))?;
    Ok(Json(game.into()))
}

/// POST /games
///
/// Answers `201` with the stored game and a `Location` header pointing at it.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateGame>,
) -> AppResult<impl IntoResponse> {
    let mut session = gamestore_db::begin(&state.pool).await?;
    let game = GameRepo::create(&mut *session, &NewGame::from(input)).await?;
    session.commit().await?;

    tracing::info!(game_id = game.id, genre_id = game.genre_id, "Game created");

    let location = game_location(game.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(GameDetails::from(game)),
    ))
}

/// PUT /games/{id}
///
/// Replaces every field of the stored game. Unknown ids answer `404` and
/// insert nothing.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateGame>,
) -> AppResult<StatusCode> {
    let mut session = gamestore_db::begin(&state.pool).await?;
    let replaced = GameRepo::overwrite(&mut *session, &Game::from_update(id, input)).await?;
    if !replaced {
        return Err(AppError::Core(CoreError::NotFound { entity: "Game", id }));
    }
    session.commit().await?;

    tracing::info!(game_id = id, "Game updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /games/{id}
///
/// Always `204`, whether or not the game existed.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let mut session = gamestore_db::begin(&state.pool).await?;
    let removed = GameRepo::delete_by_id(&mut *session, id).await?;
    session.commit().await?;

    tracing::info!(game_id = id, removed, "Game deleted");

    Ok(StatusCode::NO_CONTENT)
}
