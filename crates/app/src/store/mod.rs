//! Key-value storage backends.

use async_trait::async_trait;
use thiserror::Error;

mod memory;
mod postgres;

pub use memory::MemoryKeyValueStore;
pub use postgres::PgKeyValueStore;

/// Errors raised by key-value store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),

    #[error("value under key {key:?} is not an integer")]
    NotAnInteger { key: String },

    #[error("failed to encode or decode stored value")]
    Codec(#[from] serde_json::Error),
}

/// Minimal key-value store contract the cart store is built on.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Remove `key`, returning whether it was present.
    async fn delete(&self, key: &str) -> Result<bool, StoreError>;

    /// Whether `key` is present.
    async fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// Atomically add one to the integer under `key` and return the new value.
    ///
    /// A missing key counts as zero.
    async fn increment(&self, key: &str) -> Result<i64, StoreError>;

    /// Every key currently stored.
    async fn keys(&self) -> Result<Vec<String>, StoreError>;

    /// Remove every key.
    async fn flush(&self) -> Result<(), StoreError>;
}
