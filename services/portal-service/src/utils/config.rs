// /auth-portal/services/portal-service/src/utils/config.rs

use std::{env, path::PathBuf, str::FromStr, time::Duration};

pub const DEFAULT_SECRET_KEY: &str = "dev";
const DEFAULT_DATABASE_PATH: &str = "instance/auth-portal.sqlite";
/// Upper bound for the inactivity window, cookie expiry math overflows far beyond it
pub const MAX_SESSION_IDLE: Duration = Duration::from_secs(366 * 24 * 60 * 60);

/// Runtime configuration, read from the environment (and `.env`) at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub secret_key: String,
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub session_idle: Duration,
    pub session_max_entries: u64,
    pub secure_cookie: bool,
    pub pepper: String,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            host: "127.0.0.1".to_string(),
            port: 5000,
            session_idle: Duration::from_secs(60 * 60),
            session_max_entries: 10_000,
            secure_cookie: false,
            pepper: String::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl AppConfig {
    /// Build config dari environment variables, missing values use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let secret_key = env::var("SECRET_KEY").unwrap_or(defaults.secret_key);
        let database_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.database_path);
        let host = env::var("SERVER_HOST").unwrap_or(defaults.host);
        let port = env_or("SERVER_PORT", defaults.port);
        let session_idle = Duration::from_secs(env_or("SESSION_IDLE_MINUTES", 60u64).saturating_mul(60))
            .min(MAX_SESSION_IDLE);
        let session_max_entries = env_or("SESSION_MAX_ENTRIES", defaults.session_max_entries);
        let secure_cookie = env_or("SESSION_SECURE_COOKIE", defaults.secure_cookie);
        let pepper = env::var("PASSWORD_PEPPER").unwrap_or(defaults.pepper);
        let request_timeout = Duration::from_secs(env_or("REQUEST_TIMEOUT_SECONDS", 30u64));

        Self {
            secret_key,
            database_path,
            host,
            port,
            session_idle,
            session_max_entries,
            secure_cookie,
            pepper,
            request_timeout,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

/// Parse an env var, falling back (with a warning) when it is set but invalid
fn env_or<T: FromStr + Copy + std::fmt::Debug>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid value {:?} for {}, using {:?}", raw, key, default);
            default
        }),
        Err(_) => default,
    }
}
