//! Server configuration

use crate::error::BoxError;

/// Server configuration, read from environment variables
///
/// | Variable | Default |
/// |----------|---------|
/// | DATABASE_URL | required |
/// | HTTP_PORT | 5000 |
/// | ENVIRONMENT | development |
/// | DB_MAX_CONNECTIONS | 10 |
/// | DB_ACQUIRE_TIMEOUT_MS | 5000 |
/// | RUN_MIGRATIONS | true in development, false otherwise |
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP listen port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Pool size
    pub db_max_connections: u32,
    /// How long a request waits for a pooled connection
    pub db_acquire_timeout_ms: u64,
    /// Apply the bundled schema on startup
    pub run_migrations: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable source
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let environment = var("ENVIRONMENT").unwrap_or_else(|| "development".into());
        let run_migrations = var("RUN_MIGRATIONS")
            .and_then(|v| parse_bool(&v))
            .unwrap_or(environment == "development");

        Ok(Self {
            database_url: var("DATABASE_URL")
                .filter(|s| !s.is_empty())
                .ok_or("DATABASE_URL must be set")?,
            http_port: var("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            db_max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|p| p.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(10),
            db_acquire_timeout_ms: var("DB_ACQUIRE_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment,
            run_migrations,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
