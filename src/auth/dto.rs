use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::repo_types::User;

/// Request body for signup.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Response returned by signup, login and me.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: PublicUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_never_carries_the_password_hash() {
        let user = User {
            id: 7,
            username: "alice".into(),
            email: "a@x.com".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        };

        let json = serde_json::to_string(&AuthResponse { user: user.into() }).unwrap();
        assert!(json.contains("\"alice\""));
        assert!(json.contains("\"a@x.com\""));
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn user_row_serialization_also_skips_the_hash() {
        let user = User {
            id: 7,
            username: "alice".into(),
            email: "a@x.com".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
    }
}
