use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Watchlist row scoped to one user and one piece of content.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WatchlistItem {
    pub id: i64,
    pub user_id: i64,
    pub tmdb_id: i64,
    pub media_type: String,
    #[serde(with = "time::serde::rfc3339")]
    pub added_at: OffsetDateTime,
}

/// Append-only audit entry recording a watchlist mutation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WatchlistHistoryEntry {
    pub id: i64,
    pub user_id: i64,
    pub tmdb_id: i64,
    pub media_type: String,
    pub action: String,
    #[serde(with = "time::serde::rfc3339")]
    pub action_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy)]
pub enum WatchlistAction {
    Added,
    Removed,
}

impl WatchlistAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchlistAction::Added => "added",
            WatchlistAction::Removed => "removed",
        }
    }
}
