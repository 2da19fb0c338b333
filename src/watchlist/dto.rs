use serde::{Deserialize, Serialize};

use super::repo_types::{WatchlistHistoryEntry, WatchlistItem};
use crate::dto::MediaType;

/// Request body for adding an item to the watchlist.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWatchlistRequest {
    pub tmdb_id: i64,
    pub media_type: MediaType,
}

/// Query string for removing a watchlist item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveWatchlistParams {
    pub media_type: MediaType,
}

#[derive(Debug, Serialize)]
pub struct WatchlistResponse {
    pub watchlist: Vec<WatchlistItem>,
}

/// `item` is null when the content was already on the watchlist.
#[derive(Debug, Serialize)]
pub struct WatchlistItemResponse {
    pub item: Option<WatchlistItem>,
}

#[derive(Debug, Serialize)]
pub struct WatchlistHistoryResponse {
    pub history: Vec<WatchlistHistoryEntry>,
}
