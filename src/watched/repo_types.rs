use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Watched marker scoped to one user and one piece of content.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WatchedItem {
    pub id: i64,
    pub user_id: i64,
    pub tmdb_id: i64,
    pub media_type: String,
    #[serde(with = "time::serde::rfc3339")]
    pub watched_at: OffsetDateTime,
}
