use std::str::FromStr;
use std::time::Duration;

use contacts_core::lookup::DEFAULT_LOOKUP_TIMEOUT;

use crate::auth::jwt::JwtConfig;

/// Which [`ContactStore`](contacts_db::store::ContactStore) backend to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Postgres via `DATABASE_URL`.
    Postgres,
    /// In-process map. Data is lost on restart.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(format!(
                "unknown store backend '{other}' (expected 'postgres' or 'memory')"
            )),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Whole-request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long a single-contact lookup may run before it is reported as
    /// not found (default: 5000 ms).
    pub lookup_timeout: Duration,
    /// Persistence backend (default: Postgres).
    pub store_backend: StoreBackend,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                 |
    /// |-----------------------------|-------------------------|
    /// | `HOST`                      | `0.0.0.0`               |
    /// | `PORT`                      | `3000`                  |
    /// | `CORS_ORIGINS`              | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                    |
    /// | `CONTACT_LOOKUP_TIMEOUT_MS` | `5000`                  |
    /// | `STORE_BACKEND`             | `postgres`              |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let lookup_timeout = std::env::var("CONTACT_LOOKUP_TIMEOUT_MS")
            .ok()
            .map(|ms| {
                Duration::from_millis(
                    ms.parse()
                        .expect("CONTACT_LOOKUP_TIMEOUT_MS must be a valid u64"),
                )
            })
            .unwrap_or(DEFAULT_LOOKUP_TIMEOUT);

        let store_backend: StoreBackend = std::env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "postgres".into())
            .parse()
            .unwrap_or_else(|e| panic!("STORE_BACKEND: {e}"));

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            lookup_timeout,
            store_backend,
            jwt,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
