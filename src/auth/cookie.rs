use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use crate::config::AppConfig;

/// Name of the session cookie shared with the frontend.
pub const SESSION_COOKIE: &str = "token";

/// Builds the session cookie for a freshly signed token.
///
/// HttpOnly keeps the token out of reach of page scripts. Production runs
/// the frontend and backend on separate origins, so the cookie must be
/// cross-site (SameSite=None) and therefore Secure; local development is
/// same-site and stays on Lax without requiring HTTPS. Lifetime mirrors the
/// token ttl.
pub fn session_cookie(token: String, config: &AppConfig) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_max_age(Duration::days(config.jwt.ttl_days));
    if config.is_production() {
        cookie.set_secure(true);
        cookie.set_same_site(SameSite::None);
    } else {
        cookie.set_same_site(SameSite::Lax);
    }
    cookie
}

/// Cookie used by logout to make the client drop its token immediately.
pub fn clear_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_max_age(Duration::ZERO);
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Environment, HashConfig, JwtConfig};

    fn config(environment: Environment) -> AppConfig {
        AppConfig {
            database_url: "postgres://localhost/test".into(),
            environment,
            frontend_origin: "http://localhost:5173".into(),
            jwt: JwtConfig {
                secret: "test-secret".into(),
                ttl_days: 7,
            },
            hashing: HashConfig {
                m_cost_kib: 8,
                t_cost: 1,
                p_cost: 1,
            },
        }
    }

    #[test]
    fn production_cookie_is_cross_site_and_secure() {
        let cookie = session_cookie("tok".into(), &config(Environment::Production));
        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn development_cookie_is_same_site_without_secure() {
        let cookie = session_cookie("tok".into(), &config(Environment::Development));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), None);
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let cookie = clear_session_cookie();
        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.path(), Some("/"));
    }
}
