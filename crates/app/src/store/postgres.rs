//! `PostgreSQL` key-value store.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, query, query_scalar};

use super::{KeyValueStore, StoreError};

const GET_ENTRY_SQL: &str = include_str!("sql/get_entry.sql");
const SET_ENTRY_SQL: &str = include_str!("sql/set_entry.sql");
const DELETE_ENTRY_SQL: &str = include_str!("sql/delete_entry.sql");
const ENTRY_EXISTS_SQL: &str = include_str!("sql/entry_exists.sql");
const INCREMENT_ENTRY_SQL: &str = include_str!("sql/increment_entry.sql");
const LIST_KEYS_SQL: &str = include_str!("sql/list_keys.sql");
const FLUSH_ENTRIES_SQL: &str = include_str!("sql/flush_entries.sql");

/// `invalid_text_representation`, raised when the counter is not a number.
const INVALID_TEXT_REPRESENTATION: &str = "22P02";

/// Key-value store backed by the `kv_entries` table.
#[derive(Debug, Clone)]
pub struct PgKeyValueStore {
    pool: PgPool,
}

impl PgKeyValueStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStore for PgKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = query_scalar::<Postgres, String>(GET_ENTRY_SQL)
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        query(SET_ENTRY_SQL)
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let rows_affected = query(DELETE_ENTRY_SQL)
            .bind(key)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let exists = query_scalar::<Postgres, bool>(ENTRY_EXISTS_SQL)
            .bind(key)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn increment(&self, key: &str) -> Result<i64, StoreError> {
        query_scalar::<Postgres, i64>(INCREMENT_ENTRY_SQL)
            .bind(key)
            .fetch_one(&self.pool)
            .await
            .map_err(|error| {
                let invalid_counter = error
                    .as_database_error()
                    .and_then(|db| db.code())
                    .is_some_and(|code| code == INVALID_TEXT_REPRESENTATION);

                if invalid_counter {
                    StoreError::NotAnInteger {
                        key: key.to_string(),
                    }
                } else {
                    StoreError::Sql(error)
                }
            })
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        let keys = query_scalar::<Postgres, String>(LIST_KEYS_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(keys)
    }

    async fn flush(&self) -> Result<(), StoreError> {
        query(FLUSH_ENTRIES_SQL).execute(&self.pool).await?;

        Ok(())
    }
}
