//! In-process key-value store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{KeyValueStore, StoreError};

/// Mutex-guarded map. Every operation holds the lock for its whole duration.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.lock().insert(key.to_string(), value);

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries.lock().remove(key).is_some())
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries.lock().contains_key(key))
    }

    async fn increment(&self, key: &str) -> Result<i64, StoreError> {
        let mut entries = self.entries.lock();

        let current = match entries.get(key) {
            Some(value) => value
                .parse::<i64>()
                .map_err(|_source| StoreError::NotAnInteger {
                    key: key.to_string(),
                })?,
            None => 0,
        };

        let next = current + 1;

        entries.insert(key.to_string(), next.to_string());

        Ok(next)
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.entries.lock().keys().cloned().collect())
    }

    async fn flush(&self) -> Result<(), StoreError> {
        self.entries.lock().clear();

        Ok(())
    }
}
