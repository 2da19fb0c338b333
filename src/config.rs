use serde::Deserialize;

/// Deployment environment. Drives the session cookie policy: same-site in
/// development, cross-site in production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_days: i64,
}

/// Argon2 work-factor knobs. Tunable per deployment so hashing cost can be
/// raised without touching code.
#[derive(Debug, Clone, Deserialize)]
pub struct HashConfig {
    pub m_cost_kib: u32,
    pub t_cost: u32,
    pub p_cost: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub environment: Environment,
    pub frontend_origin: String,
    pub jwt: JwtConfig,
    pub hashing: HashConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let environment = match std::env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };
        let frontend_origin = std::env::var("FRONTEND_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5173".into());
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            ttl_days: std::env::var("JWT_TTL_DAYS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(7),
        };
        let hashing = HashConfig {
            m_cost_kib: std::env::var("ARGON2_M_COST_KIB")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(19456),
            t_cost: std::env::var("ARGON2_T_COST")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(2),
            p_cost: std::env::var("ARGON2_P_COST")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(1),
        };
        Ok(Self {
            database_url,
            environment,
            frontend_origin,
            jwt,
            hashing,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
