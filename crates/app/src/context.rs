//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database,
    domain::carts::{CartsService, StoreCartsService},
    store::{KeyValueStore, MemoryKeyValueStore, PgKeyValueStore},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database: {0}")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations: {0}")]
    Migrations(#[source] MigrateError),

    #[error("DATABASE_URL is required for the postgres store backend")]
    MissingDatabaseUrl,
}

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
}

impl AppContext {
    /// Build application context on top of the given store.
    #[must_use]
    pub fn from_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            carts: Arc::new(StoreCartsService::new(store)),
        }
    }

    /// Build application context backed by a process-local store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(MemoryKeyValueStore::new()))
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying
    /// migrations fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let store = connect_store(url).await?;

        Ok(Self::from_store(Arc::new(store)))
    }
}

/// Connect to `PostgreSQL` and prepare the key-value table.
///
/// # Errors
///
/// Returns an error when establishing a database connection or applying
/// migrations fails.
pub async fn connect_store(url: &str) -> Result<PgKeyValueStore, AppInitError> {
    let pool = database::connect(url)
        .await
        .map_err(AppInitError::Database)?;

    database::migrate(&pool)
        .await
        .map_err(AppInitError::Migrations)?;

    Ok(PgKeyValueStore::new(pool))
}
