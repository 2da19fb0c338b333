use serde::{Deserialize, Serialize};

use super::repo_types::WatchedItem;
use crate::dto::MediaType;

/// Request body for marking content as watched.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkWatchedRequest {
    pub tmdb_id: i64,
    pub media_type: MediaType,
}

/// Query string for unmarking watched content.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmarkWatchedParams {
    pub media_type: MediaType,
}

#[derive(Debug, Serialize)]
pub struct WatchedResponse {
    pub watched: Vec<WatchedItem>,
}

/// `item` is null when the content was already marked watched.
#[derive(Debug, Serialize)]
pub struct WatchedItemResponse {
    pub item: Option<WatchedItem>,
}
