use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::warn;

use super::cookie::SESSION_COOKIE;
use super::jwt::JwtKeys;
use crate::error::ApiError;
use crate::state::AppState;

/// Per-request authentication gate.
///
/// Pulls the session cookie out of the request, verifies the token and
/// hands the caller's user id to the handler. Verification happens before
/// any storage access: a missing or bad token never reaches the pool.
pub struct AuthUser(pub i64);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(SESSION_COOKIE).ok_or(ApiError::Unauthenticated)?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token.value()).map_err(|e| {
            warn!(error = %e, "session token rejected");
            ApiError::InvalidToken
        })?;

        Ok(AuthUser(claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, Request};

    fn parts_with_cookie(cookie: Option<String>) -> Parts {
        let mut builder = Request::builder().uri("/api/favorites");
        if let Some(value) = cookie {
            builder = builder.header(header::COOKIE, value);
        }
        builder.body(()).expect("request").into_parts().0
    }

    #[tokio::test]
    async fn missing_cookie_is_rejected_without_touching_storage() {
        // The fake state holds a lazily connecting pool; any storage access
        // would fail the test with a connection error instead of this 401.
        let state = AppState::fake();
        let mut parts = parts_with_cookie(None);
        let Err(err) = AuthUser::from_request_parts(&mut parts, &state).await else {
            panic!("expected rejection");
        };
        assert!(matches!(err, ApiError::Unauthenticated));
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let state = AppState::fake();
        let mut parts = parts_with_cookie(Some("token=not-a-jwt".into()));
        let Err(err) = AuthUser::from_request_parts(&mut parts, &state).await else {
            panic!("expected rejection");
        };
        assert!(matches!(err, ApiError::InvalidToken));
    }

    #[tokio::test]
    async fn valid_cookie_resolves_the_issued_user_id() {
        let state = AppState::fake();
        let token = JwtKeys::from_ref(&state).sign(42).expect("sign");
        let mut parts = parts_with_cookie(Some(format!("token={token}")));
        let AuthUser(user_id) = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .expect("gate should pass");
        assert_eq!(user_id, 42);
    }

    #[tokio::test]
    async fn unrelated_cookies_do_not_authenticate() {
        let state = AppState::fake();
        let mut parts = parts_with_cookie(Some("theme=dark; other=1".into()));
        let Err(err) = AuthUser::from_request_parts(&mut parts, &state).await else {
            panic!("expected rejection");
        };
        assert!(matches!(err, ApiError::Unauthenticated));
    }
}
