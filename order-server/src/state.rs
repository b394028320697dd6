//! Application state for order-server

use std::sync::Arc;

use crate::config::Config;
use crate::db::{PgStore, Store};
use crate::error::BoxError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Data-access capability (Postgres in production, a fake in tests)
    pub store: Arc<dyn Store>,
}

impl AppState {
    /// Connect to the database described by `config`
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let store = PgStore::connect(config).await?;
        tracing::info!(
            max_connections = config.db_max_connections,
            "Database pool ready"
        );
        Ok(Self::with_store(store))
    }

    pub fn with_store(store: impl Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
