use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the Postgres backend.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Open a pooled connection to Postgres.
///
/// The pool is bounded in size and in connection lifetime so a long-running
/// process cannot exhaust the server under load.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    let opts = ConnectOptions::new(config.url.clone())
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(30 * 60))
        .sqlx_logging(true)
        .to_owned();

    let db = Database::connect(opts).await?;
    tracing::info!(pool = config.max_connections, "Database connected");

    Ok(db)
}
