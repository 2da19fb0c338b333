use sqlx::PgPool;

use super::repo_types::User;

impl User {
    /// Used by signup to reject duplicates before hashing.
    pub async fn find_by_username_or_email(
        db: &PgPool,
        username: &str,
        email: &str,
    ) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE username = $1 OR email = $2
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Used by login to retrieve the stored hash for comparison.
    pub async fn find_by_username(db: &PgPool, username: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await
    }

    /// Used by identity lookup after token verification.
    pub async fn find_by_id(db: &PgPool, id: i64) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Create a new user with a hashed password. A unique violation here
    /// means a concurrent signup won the race; callers treat it as a
    /// duplicate, not a server error.
    pub async fn create(
        db: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password_hash, created_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }
}
