use sqlx::PgPool;

use super::repo_types::ContinueWatchingItem;

impl ContinueWatchingItem {
    /// Most recently watched first, capped at 20 rows for the home rail.
    pub async fn list_by_user(
        db: &PgPool,
        user_id: i64,
    ) -> sqlx::Result<Vec<ContinueWatchingItem>> {
        sqlx::query_as::<_, ContinueWatchingItem>(
            r#"
            SELECT id, user_id, tmdb_id, media_type, progress, season, episode, last_watched
            FROM continue_watching
            WHERE user_id = $1
            ORDER BY last_watched DESC
            LIMIT 20
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// Insert-or-update keyed on (user_id, tmdb_id), refreshing
    /// last_watched on every report.
    pub async fn upsert(
        db: &PgPool,
        user_id: i64,
        tmdb_id: i64,
        media_type: &str,
        progress: f64,
        season: Option<i32>,
        episode: Option<i32>,
    ) -> sqlx::Result<ContinueWatchingItem> {
        sqlx::query_as::<_, ContinueWatchingItem>(
            r#"
            INSERT INTO continue_watching
                (user_id, tmdb_id, media_type, progress, season, episode, last_watched)
            VALUES ($1, $2, $3, $4, $5, $6, now())
            ON CONFLICT (user_id, tmdb_id)
            DO UPDATE SET
                media_type = EXCLUDED.media_type,
                progress = EXCLUDED.progress,
                season = EXCLUDED.season,
                episode = EXCLUDED.episode,
                last_watched = now()
            RETURNING id, user_id, tmdb_id, media_type, progress, season, episode, last_watched
            "#,
        )
        .bind(user_id)
        .bind(tmdb_id)
        .bind(media_type)
        .bind(progress)
        .bind(season)
        .bind(episode)
        .fetch_one(db)
        .await
    }

    pub async fn delete(db: &PgPool, user_id: i64, tmdb_id: i64) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM continue_watching WHERE user_id = $1 AND tmdb_id = $2")
            .bind(user_id)
            .bind(tmdb_id)
            .execute(db)
            .await?;
        Ok(())
    }
}
