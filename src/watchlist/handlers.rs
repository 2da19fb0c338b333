use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::extractors::AuthUser, dto::MessageResponse, error::ApiError, state::AppState,
    tasks::spawn_logged,
};

use super::dto::{
    AddWatchlistRequest, RemoveWatchlistParams, WatchlistHistoryResponse, WatchlistItemResponse,
    WatchlistResponse,
};
use super::repo_types::{WatchlistAction, WatchlistHistoryEntry, WatchlistItem};

pub fn watchlist_routes() -> Router<AppState> {
    Router::new()
        .route("/watchlist", get(list_watchlist).post(add_to_watchlist))
        .route("/watchlist/:tmdb_id", delete(remove_from_watchlist))
        .route("/watchlist-history", get(watchlist_history))
}

#[instrument(skip(state))]
async fn list_watchlist(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<WatchlistResponse>, ApiError> {
    let watchlist = WatchlistItem::list_by_user(&state.db, user_id).await?;
    Ok(Json(WatchlistResponse { watchlist }))
}

#[instrument(skip(state, payload))]
async fn add_to_watchlist(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<AddWatchlistRequest>,
) -> Result<(StatusCode, Json<WatchlistItemResponse>), ApiError> {
    let item = WatchlistItem::insert(
        &state.db,
        user_id,
        payload.tmdb_id,
        payload.media_type.as_str(),
    )
    .await?;

    record_history(&state, user_id, payload.tmdb_id, payload.media_type.as_str(), WatchlistAction::Added);

    info!(user_id, tmdb_id = payload.tmdb_id, "watchlist item added");
    Ok((StatusCode::CREATED, Json(WatchlistItemResponse { item })))
}

#[instrument(skip(state))]
async fn remove_from_watchlist(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(tmdb_id): Path<i64>,
    Query(params): Query<RemoveWatchlistParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    WatchlistItem::delete(&state.db, user_id, tmdb_id, params.media_type.as_str()).await?;

    record_history(&state, user_id, tmdb_id, params.media_type.as_str(), WatchlistAction::Removed);

    info!(user_id, tmdb_id, "watchlist item removed");
    Ok(Json(MessageResponse::new("Removed from watchlist")))
}

#[instrument(skip(state))]
async fn watchlist_history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<WatchlistHistoryResponse>, ApiError> {
    let history = WatchlistHistoryEntry::list_recent(&state.db, user_id).await?;
    Ok(Json(WatchlistHistoryResponse { history }))
}

/// Best-effort audit logging parallel to the primary write; detached so it
/// can never fail or delay the response.
fn record_history(
    state: &AppState,
    user_id: i64,
    tmdb_id: i64,
    media_type: &str,
    action: WatchlistAction,
) {
    let db = state.db.clone();
    let media_type = media_type.to_string();
    spawn_logged("watchlist history", async move {
        WatchlistHistoryEntry::record(&db, user_id, tmdb_id, &media_type, action).await?;
        Ok(())
    });
}
