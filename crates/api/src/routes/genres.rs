use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::handlers::genres;
use crate::state::AppState;

/// Genre routes mounted at `/genre`. Read-only.
pub fn router() -> Router<AppState> {
    Router::new().route("/", collection())
}

pub fn collection() -> MethodRouter<AppState> {
    get(genres::list)
}
