use axum::Router;

use crate::state::AppState;

mod dto;
pub mod handlers;
mod repo;
mod repo_types;

pub fn router() -> Router<AppState> {
    handlers::watchlist_routes()
}
