use sqlx::PgPool;

use super::repo_types::{WatchlistAction, WatchlistHistoryEntry, WatchlistItem};

impl WatchlistItem {
    pub async fn list_by_user(db: &PgPool, user_id: i64) -> sqlx::Result<Vec<WatchlistItem>> {
        sqlx::query_as::<_, WatchlistItem>(
            r#"
            SELECT id, user_id, tmdb_id, media_type, added_at
            FROM watchlists
            WHERE user_id = $1
            ORDER BY added_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// Returns None when the item is already on the watchlist.
    pub async fn insert(
        db: &PgPool,
        user_id: i64,
        tmdb_id: i64,
        media_type: &str,
    ) -> sqlx::Result<Option<WatchlistItem>> {
        sqlx::query_as::<_, WatchlistItem>(
            r#"
            INSERT INTO watchlists (user_id, tmdb_id, media_type)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, tmdb_id, media_type) DO NOTHING
            RETURNING id, user_id, tmdb_id, media_type, added_at
            "#,
        )
        .bind(user_id)
        .bind(tmdb_id)
        .bind(media_type)
        .fetch_optional(db)
        .await
    }

    pub async fn delete(
        db: &PgPool,
        user_id: i64,
        tmdb_id: i64,
        media_type: &str,
    ) -> sqlx::Result<()> {
        sqlx::query(
            "DELETE FROM watchlists WHERE user_id = $1 AND tmdb_id = $2 AND media_type = $3",
        )
        .bind(user_id)
        .bind(tmdb_id)
        .bind(media_type)
        .execute(db)
        .await?;
        Ok(())
    }
}

impl WatchlistHistoryEntry {
    /// Appends an audit entry. Called from a detached task; failures are
    /// logged by the spawner and never fail the watchlist write itself.
    pub async fn record(
        db: &PgPool,
        user_id: i64,
        tmdb_id: i64,
        media_type: &str,
        action: WatchlistAction,
    ) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO watchlist_history (user_id, tmdb_id, media_type, action)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user_id)
        .bind(tmdb_id)
        .bind(media_type)
        .bind(action.as_str())
        .execute(db)
        .await?;
        Ok(())
    }

    /// History entries from the last 30 days, newest first.
    pub async fn list_recent(
        db: &PgPool,
        user_id: i64,
    ) -> sqlx::Result<Vec<WatchlistHistoryEntry>> {
        sqlx::query_as::<_, WatchlistHistoryEntry>(
            r#"
            SELECT id, user_id, tmdb_id, media_type, action, action_at
            FROM watchlist_history
            WHERE user_id = $1 AND action_at >= now() - INTERVAL '30 days'
            ORDER BY action_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }
}
