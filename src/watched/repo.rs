use sqlx::PgPool;

use super::repo_types::WatchedItem;

impl WatchedItem {
    pub async fn list_by_user(db: &PgPool, user_id: i64) -> sqlx::Result<Vec<WatchedItem>> {
        sqlx::query_as::<_, WatchedItem>(
            r#"
            SELECT id, user_id, tmdb_id, media_type, watched_at
            FROM watched
            WHERE user_id = $1
            ORDER BY watched_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// Returns None when the item was already marked watched.
    pub async fn mark(
        db: &PgPool,
        user_id: i64,
        tmdb_id: i64,
        media_type: &str,
    ) -> sqlx::Result<Option<WatchedItem>> {
        sqlx::query_as::<_, WatchedItem>(
            r#"
            INSERT INTO watched (user_id, tmdb_id, media_type)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, tmdb_id, media_type) DO NOTHING
            RETURNING id, user_id, tmdb_id, media_type, watched_at
            "#,
        )
        .bind(user_id)
        .bind(tmdb_id)
        .bind(media_type)
        .fetch_optional(db)
        .await
    }

    pub async fn unmark(
        db: &PgPool,
        user_id: i64,
        tmdb_id: i64,
        media_type: &str,
    ) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM watched WHERE user_id = $1 AND tmdb_id = $2 AND media_type = $3")
            .bind(user_id)
            .bind(tmdb_id)
            .bind(media_type)
            .execute(db)
            .await?;
        Ok(())
    }
}
