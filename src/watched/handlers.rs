use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{auth::extractors::AuthUser, dto::MessageResponse, error::ApiError, state::AppState};

use super::dto::{MarkWatchedRequest, UnmarkWatchedParams, WatchedItemResponse, WatchedResponse};
use super::repo_types::WatchedItem;

pub fn watched_routes() -> Router<AppState> {
    Router::new()
        .route("/watched", get(list_watched).post(mark_watched))
        .route("/watched/:tmdb_id", delete(unmark_watched))
}

#[instrument(skip(state))]
async fn list_watched(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<WatchedResponse>, ApiError> {
    let watched = WatchedItem::list_by_user(&state.db, user_id).await?;
    Ok(Json(WatchedResponse { watched }))
}

#[instrument(skip(state, payload))]
async fn mark_watched(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<MarkWatchedRequest>,
) -> Result<(StatusCode, Json<WatchedItemResponse>), ApiError> {
    let item = WatchedItem::mark(
        &state.db,
        user_id,
        payload.tmdb_id,
        payload.media_type.as_str(),
    )
    .await?;
    info!(user_id, tmdb_id = payload.tmdb_id, "marked watched");
    Ok((StatusCode::CREATED, Json(WatchedItemResponse { item })))
}

#[instrument(skip(state))]
async fn unmark_watched(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(tmdb_id): Path<i64>,
    Query(params): Query<UnmarkWatchedParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    WatchedItem::unmark(&state.db, user_id, tmdb_id, params.media_type.as_str()).await?;
    info!(user_id, tmdb_id, "unmarked watched");
    Ok(Json(MessageResponse::new("Removed from watched")))
}
