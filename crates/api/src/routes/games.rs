//! Route definitions for the `/games` resource.

use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

/// Game routes mounted at `/games`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", collection()).route(
        "/{id}",
        get(games::get_by_id)
            .put(games::update)
            .delete(games::delete),
    )
}

/// Handlers for the collection itself, shared by `/games` and `/games/`.
pub fn collection() -> MethodRouter<AppState> {
    get(games::list).post(games::create)
}
