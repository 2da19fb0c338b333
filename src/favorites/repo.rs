use sqlx::PgPool;

use super::repo_types::Favorite;

impl Favorite {
    /// All favorites for a user, newest first.
    pub async fn list_by_user(db: &PgPool, user_id: i64) -> sqlx::Result<Vec<Favorite>> {
        sqlx::query_as::<_, Favorite>(
            r#"
            SELECT id, user_id, tmdb_id, media_type, added_at
            FROM favorites
            WHERE user_id = $1
            ORDER BY added_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// Returns None when the favorite already existed; duplicates per user
    /// per content item are absorbed by the unique constraint.
    pub async fn insert(
        db: &PgPool,
        user_id: i64,
        tmdb_id: i64,
        media_type: &str,
    ) -> sqlx::Result<Option<Favorite>> {
        sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (user_id, tmdb_id, media_type)
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
        sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND tmdb_id = $2 AND media_type = $3")
            .bind(user_id)
            .bind(tmdb_id)
            .bind(media_type)
            .execute(db)
            .await?;
        Ok(())
    }
}
