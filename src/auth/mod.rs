use axum::Router;

use crate::state::AppState;

mod cookie;
mod dto;
pub(crate) mod extractors;
pub mod handlers;
mod jwt;
mod password;
mod repo;
mod repo_types;

pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}
