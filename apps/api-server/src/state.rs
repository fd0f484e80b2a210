//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostStore;
use quill_infra::InMemoryPostStore;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// State backed by the in-memory store.
    pub fn in_memory() -> Self {
        Self {
            posts: Arc::new(InMemoryPostStore::new()),
        }
    }

    /// Build the application state with the appropriate store backend.
    ///
    /// Postgres when configured and reachable; otherwise the in-memory
    /// store, so the service stays up even without a database.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        if let Some(settings) = &config.database {
            let db_config = quill_infra::database::DatabaseConfig {
                url: settings.url.clone(),
                max_connections: settings.max_connections,
                min_connections: settings.min_connections,
            };

            return match quill_infra::database::connect(&db_config).await {
                Ok(conn) => {
                    tracing::info!("Using the Postgres post store");
                    Self {
                        posts: Arc::new(quill_infra::PostgresPostStore::new(conn)),
                    }
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory store.",
                        e
                    );
                    Self::in_memory()
                }
            };
        }

        #[cfg(not(feature = "postgres"))]
        if config.database.is_some() {
            tracing::warn!("Built without postgres support - database settings ignored");
        }

        tracing::warn!("No database configured. Posts live in process memory only.");
        Self::in_memory()
    }
}
