use serde::{Deserialize, Serialize};

use super::repo_types::Favorite;
use crate::dto::MediaType;

/// Request body for adding a favorite. Field names match the deployed
/// frontend clients.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub tmdb_id: i64,
    pub media_type: MediaType,
}

/// Query string for removing a favorite.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFavoriteParams {
    pub media_type: MediaType,
}

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<Favorite>,
}

/// `favorite` is null when the item was already favorited.
#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub favorite: Option<Favorite>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_request_uses_camel_case_field_names() {
        let request: AddFavoriteRequest =
            serde_json::from_str(r#"{"tmdbId": 603, "mediaType": "movie"}"#).unwrap();
        assert_eq!(request.tmdb_id, 603);
        assert_eq!(request.media_type, MediaType::Movie);
    }
}
