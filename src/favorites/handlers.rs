use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{auth::extractors::AuthUser, dto::MessageResponse, error::ApiError, state::AppState};

use super::dto::{AddFavoriteRequest, FavoriteResponse, FavoritesResponse, RemoveFavoriteParams};
use super::repo_types::Favorite;

pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(list_favorites).post(add_favorite))
        .route("/favorites/:tmdb_id", delete(remove_favorite))
}

#[instrument(skip(state))]
async fn list_favorites(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<FavoritesResponse>, ApiError> {
    let favorites = Favorite::list_by_user(&state.db, user_id).await?;
    Ok(Json(FavoritesResponse { favorites }))
}

#[instrument(skip(state, payload))]
async fn add_favorite(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<AddFavoriteRequest>,
) -> Result<(StatusCode, Json<FavoriteResponse>), ApiError> {
    let favorite = Favorite::insert(
        &state.db,
        user_id,
        payload.tmdb_id,
        payload.media_type.as_str(),
    )
    .await?;
    info!(user_id, tmdb_id = payload.tmdb_id, "favorite added");
    Ok((StatusCode::CREATED, Json(FavoriteResponse { favorite })))
}

#[instrument(skip(state))]
async fn remove_favorite(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(tmdb_id): Path<i64>,
    Query(params): Query<RemoveFavoriteParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    Favorite::delete(&state.db, user_id, tmdb_id, params.media_type.as_str()).await?;
    info!(user_id, tmdb_id, "favorite removed");
    Ok(Json(MessageResponse::new("Removed from favorites")))
}
