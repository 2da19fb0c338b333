use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Playback progress for one user and one piece of content. One row per
/// (user, content) pair; re-watching updates it in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContinueWatchingItem {
    pub id: i64,
    pub user_id: i64,
    pub tmdb_id: i64,
    pub media_type: String,
    pub progress: f64,
    pub season: Option<i32>,
    pub episode: Option<i32>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_watched: OffsetDateTime,
}
