//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseSettings>,
}

/// Database connection settings composed from the environment.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database: Self::database_settings(),
        }
    }

    /// Resolve database settings.
    ///
    /// `DATABASE_URL` wins when set. Otherwise the URL is composed from
    /// `DB_USER` (default `postgres`), `DB_PASS` (default `postgresdb`),
    /// `DB_HOST` (default `localhost`) and `DB_NAME` (default `quill`) -
    /// but only when at least one of them is present, so an unconfigured
    /// process runs on the in-memory store.
    fn database_settings() -> Option<DatabaseSettings> {
        let url = env::var("DATABASE_URL").ok().or_else(|| {
            let any_db_var_set = ["DB_USER", "DB_PASS", "DB_HOST", "DB_NAME"]
                .iter()
                .any(|key| env::var(key).is_ok());
            if !any_db_var_set {
                return None;
            }

            let user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
            let pass = env::var("DB_PASS").unwrap_or_else(|_| "postgresdb".to_string());
            let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
            let name = env::var("DB_NAME").unwrap_or_else(|_| "quill".to_string());

            Some(format!("postgres://{user}:{pass}@{host}/{name}?sslmode=disable"))
        })?;

        Some(DatabaseSettings {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        })
    }
}
