use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;

use crate::{config::JwtConfig, state::AppState};

/// JWT payload of a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,   // user ID
    pub iat: usize, // issued at (unix timestamp)
    pub exp: usize, // expires at (unix timestamp)
}

/// Internal verification outcome. Both variants surface to the client as
/// the same 401; the distinction exists for logging only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
}

/// Holds the signing secret in key form plus the session ttl. The only
/// place in the crate that can mint or check tokens.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig { secret, ttl_days } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::from_secs((ttl_days as u64) * 24 * 60 * 60),
        }
    }
}

impl JwtKeys {
    pub fn sign(&self, user_id: i64) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            sub: user_id,
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id, "session token signed");
        Ok(token)
    }

    /// Signature and expiry checks only. Never touches storage, so a bad
    /// token is rejected without a database round-trip.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data =
            decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid,
                }
            })?;
        debug!(user_id = data.claims.sub, "session token verified");
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys(secret: &str) -> JwtKeys {
        JwtKeys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::from_secs(7 * 24 * 60 * 60),
        }
    }

    #[test]
    fn sign_and_verify_returns_the_issued_user_id() {
        let keys = make_keys("dev-secret");
        let token = keys.sign(42).expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, 42);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn verify_rejects_token_signed_with_another_secret() {
        let ours = make_keys("dev-secret");
        let theirs = make_keys("other-secret");
        let token = theirs.sign(42).expect("sign");
        assert_eq!(ours.verify(&token).unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn verify_rejects_malformed_token() {
        let keys = make_keys("dev-secret");
        assert_eq!(
            keys.verify("definitely.not.a-jwt").unwrap_err(),
            TokenError::Invalid
        );
    }

    #[test]
    fn verify_rejects_past_expiry() {
        let keys = make_keys("dev-secret");
        let now = OffsetDateTime::now_utc();
        let claims = Claims {
            sub: 42,
            iat: (now - TimeDuration::hours(10)).unix_timestamp() as usize,
            exp: (now - TimeDuration::hours(9)).unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).expect("sign");
        assert_eq!(keys.verify(&token).unwrap_err(), TokenError::Expired);
    }
}
