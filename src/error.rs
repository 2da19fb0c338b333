use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Everything a handler can fail with, mapped onto a fixed HTTP contract.
///
/// Token failures deliberately collapse into a single 401 body, and raw
/// storage errors never reach the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("User not found")]
    UserNotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) | ApiError::Conflict(msg) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            ApiError::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, "Not authenticated".to_string())
            }
            ApiError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Invalid or expired token".to_string(),
            ),
            ApiError::UserNotFound => (StatusCode::NOT_FOUND, "User not found".to_string()),
            ApiError::Database(e) => {
                error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Internal(e) => {
                error!(error = %e, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_message(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let value: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        value["message"].as_str().expect("message field").to_string()
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_message() {
        let response = ApiError::Validation("All fields are required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_message(response).await, "All fields are required");
    }

    #[tokio::test]
    async fn credential_and_token_failures_all_look_like_401() {
        for err in [ApiError::InvalidCredentials, ApiError::Unauthenticated, ApiError::InvalidToken] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[tokio::test]
    async fn user_not_found_is_404_distinct_from_401() {
        let response = ApiError::UserNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_message(response).await, "User not found");
    }

    #[tokio::test]
    async fn storage_errors_are_opaque_500s() {
        let response = ApiError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_message(response).await, "Internal server error");
    }
}
