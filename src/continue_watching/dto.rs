use serde::{Deserialize, Serialize};

use super::repo_types::ContinueWatchingItem;
use crate::dto::MediaType;

/// Request body for reporting playback progress.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertContinueWatchingRequest {
    pub tmdb_id: i64,
    pub media_type: MediaType,
    pub progress: Option<f64>,
    pub season: Option<i32>,
    pub episode: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct ContinueWatchingResponse {
    pub items: Vec<ContinueWatchingItem>,
}

#[derive(Debug, Serialize)]
pub struct ContinueWatchingItemResponse {
    pub item: ContinueWatchingItem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_request_parses_camel_case_with_optional_fields() {
        let request: UpsertContinueWatchingRequest = serde_json::from_str(
            r#"{"tmdbId": 1399, "mediaType": "tv", "progress": 42.5, "season": 2, "episode": 3}"#,
        )
        .unwrap();
        assert_eq!(request.tmdb_id, 1399);
        assert_eq!(request.media_type, MediaType::Tv);
        assert_eq!(request.progress, Some(42.5));
        assert_eq!(request.season, Some(2));
        assert_eq!(request.episode, Some(3));

        let minimal: UpsertContinueWatchingRequest =
            serde_json::from_str(r#"{"tmdbId": 603, "mediaType": "movie"}"#).unwrap();
        assert_eq!(minimal.progress, None);
        assert_eq!(minimal.season, None);
    }
}
