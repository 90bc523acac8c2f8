pub mod games;
pub mod genres;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /games          list, create
/// /games/{id}     get, update (full replace), delete
/// /genre          list (read-only)
/// ```
///
/// A nested `/` only matches the bare prefix, so the collections are also
/// registered with a trailing slash.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/games", games::router())
        .route("/games/", games::collection())
        .nest("/genre", genres::router())
        .route("/genre/", genres::collection())
}
