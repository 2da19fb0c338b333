use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        cookie::{clear_session_cookie, session_cookie},
        dto::{AuthResponse, LoginRequest, SignupRequest},
        extractors::AuthUser,
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo_types::User,
    },
    dto::MessageResponse,
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
}

#[instrument(skip(state, jar, payload))]
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), ApiError> {
    let username = payload.username.trim().to_string();
    let email = payload.email.trim().to_string();

    // Validation happens before any storage access.
    if username.is_empty() || email.is_empty() || payload.password.is_empty() {
        warn!("signup with missing fields");
        return Err(ApiError::Validation("All fields are required".into()));
    }
    if payload.password.len() < 6 {
        warn!("signup password too short");
        return Err(ApiError::Validation(
            "Password must be at least 6 characters".into(),
        ));
    }

    if User::find_by_username_or_email(&state.db, &username, &email)
        .await?
        .is_some()
    {
        warn!(%username, "signup duplicate username or email");
        return Err(ApiError::Conflict("Username or email already exists".into()));
    }

    let hash = hash_password(&payload.password, &state.config.hashing)?;

    let user = User::create(&state.db, &username, &email, &hash)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                // Concurrent signup won the race between the existence
                // check and the insert.
                warn!(%username, "signup lost uniqueness race");
                ApiError::Conflict("Username or email already exists".into())
            }
            _ => ApiError::from(e),
        })?;

    let token = JwtKeys::from_ref(&state).sign(user.id)?;
    let jar = jar.add(session_cookie(token, &state.config));

    info!(user_id = user.id, %username, "user signed up");
    Ok((
        StatusCode::CREATED,
        jar,
        Json(AuthResponse { user: user.into() }),
    ))
}

#[instrument(skip(state, jar, payload))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    let username = payload.username.trim().to_string();
    if username.is_empty() || payload.password.is_empty() {
        warn!("login with missing fields");
        return Err(ApiError::Validation(
            "Username and password are required".into(),
        ));
    }

    // Unknown username and wrong password fail identically so callers
    // cannot enumerate accounts.
    let Some(user) = User::find_by_username(&state.db, &username).await? else {
        warn!(%username, "login unknown username");
        return Err(ApiError::InvalidCredentials);
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = JwtKeys::from_ref(&state).sign(user.id)?;
    let jar = jar.add(session_cookie(token, &state.config));

    info!(user_id = user.id, "user logged in");
    Ok((jar, Json(AuthResponse { user: user.into() })))
}

/// Stateless logout: no server-side session to invalidate, the cookie is
/// cleared unconditionally whether or not a valid token was presented.
#[instrument(skip(jar))]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.add(clear_session_cookie());
    (jar, Json(MessageResponse::new("Logged out successfully")))
}

#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<AuthResponse>, ApiError> {
    // The gate has already verified the token; the only remaining failure
    // is an account deleted after the token was issued.
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or(ApiError::UserNotFound)?;
    Ok(Json(AuthResponse { user: user.into() }))
}
