use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{auth::extractors::AuthUser, dto::MessageResponse, error::ApiError, state::AppState};

use super::dto::{
    ContinueWatchingItemResponse, ContinueWatchingResponse, UpsertContinueWatchingRequest,
};
use super::repo_types::ContinueWatchingItem;

pub fn continue_watching_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/continue-watching",
            get(list_continue_watching).post(upsert_continue_watching),
        )
        .route("/continue-watching/:tmdb_id", delete(remove_continue_watching))
}

#[instrument(skip(state))]
async fn list_continue_watching(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ContinueWatchingResponse>, ApiError> {
    let items = ContinueWatchingItem::list_by_user(&state.db, user_id).await?;
    Ok(Json(ContinueWatchingResponse { items }))
}

#[instrument(skip(state, payload))]
async fn upsert_continue_watching(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpsertContinueWatchingRequest>,
) -> Result<(StatusCode, Json<ContinueWatchingItemResponse>), ApiError> {
    let progress = payload.progress.unwrap_or(0.0);
    if !(0.0..=100.0).contains(&progress) {
        return Err(ApiError::Validation(
            "progress must be between 0 and 100".into(),
        ));
    }

    let item = ContinueWatchingItem::upsert(
        &state.db,
        user_id,
        payload.tmdb_id,
        payload.media_type.as_str(),
        progress,
        payload.season,
        payload.episode,
    )
    .await?;

    info!(user_id, tmdb_id = payload.tmdb_id, progress, "progress saved");
    Ok((
        StatusCode::CREATED,
        Json(ContinueWatchingItemResponse { item }),
    ))
}

#[instrument(skip(state))]
async fn remove_continue_watching(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(tmdb_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    ContinueWatchingItem::delete(&state.db, user_id, tmdb_id).await?;
    info!(user_id, tmdb_id, "continue watching entry removed");
    Ok(Json(MessageResponse::new("Removed from continue watching")))
}
