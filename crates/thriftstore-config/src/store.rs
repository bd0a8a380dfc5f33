use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

/// Which document store implementation backs the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    /// Process-local store, lost on restart. Meant for development and tests.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            _ => Err(ConfigError::Invalid {
                name: "STORE_BACKEND",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl StoreConfig {
    /// Reads `STORE_BACKEND` (default `postgres`), then `DATABASE_URL`, or
    /// builds the URL from `DB_USER`/`DB_PASS`/`DB_HOST`/`DB_NAME`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = match env::var("STORE_BACKEND") {
            Ok(raw) => raw.parse()?,
            Err(_) => StoreBackend::Postgres,
        };

        let database_url = env::var("DATABASE_URL").ok().or_else(|| {
            let user = env::var("DB_USER").ok()?;
            let pass = env::var("DB_PASS").ok()?;
            let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
            let name = env::var("DB_NAME").unwrap_or_else(|_| "thriftstore".to_string());
            Some(compose_database_url(&user, &pass, &host, &name))
        });

        if backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        Ok(Self {
            backend,
            database_url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        })
    }
}

pub fn compose_database_url(user: &str, pass: &str, host: &str, name: &str) -> String {
    format!("postgres://{}:{}@{}/{}", user, pass, host, name)
}
