//! Durable cache tier: SQLite-backed, plus an in-memory stand-in.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{DurableStorePort, StoreError, StoredResource};

/// SQLite implementation of the durable resource cache.
pub struct SqliteCacheStore {
    pool: SqlitePool,
}

impl SqliteCacheStore {
    pub async fn new(db_path: &str) -> Result<Self, StoreError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| StoreError::database("resource_cache", e))?;
        Self::with_pool(pool).await
    }

    /// A private in-memory database; a single connection keeps it alive.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| StoreError::database("resource_cache", e))?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS resource_cache (
                cache_key TEXT PRIMARY KEY NOT NULL,
                body TEXT NOT NULL,
                fetched_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::database("resource_cache", e))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl DurableStorePort for SqliteCacheStore {
    async fn get(&self, key: &str) -> Result<Option<StoredResource>, StoreError> {
        let row = sqlx::query("SELECT body, fetched_at FROM resource_cache WHERE cache_key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::database("get", e))?;

        match row {
            Some(row) => {
                let body: String = row.get("body");
                let fetched_at: String = row.get("fetched_at");
                let fetched_at = DateTime::parse_from_rfc3339(&fetched_at)
                    .map_err(StoreError::serialization)?
                    .with_timezone(&Utc);
                Ok(Some(StoredResource { body, fetched_at }))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, resource: &StoredResource) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO resource_cache (cache_key, body, fetched_at)
            VALUES (?, ?, ?)
            ON CONFLICT(cache_key) DO UPDATE SET
                body = excluded.body,
                fetched_at = excluded.fetched_at
            "#,
        )
        .bind(key)
        .bind(&resource.body)
        .bind(resource.fetched_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::database("put", e))?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM resource_cache WHERE cache_key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::database("remove", e))?;
        Ok(())
    }
}

/// Durable tier kept in process memory, used when no database path is configured.
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: RwLock<HashMap<String, StoredResource>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DurableStorePort for MemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<StoredResource>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, resource: &StoredResource) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), resource.clone());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn resource(body: &str) -> StoredResource {
        StoredResource {
            body: body.to_string(),
            fetched_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        }
    }

    async fn exercise(store: &dyn DurableStorePort) {
        assert_eq!(store.get("pokeapi:pokemon:pikachu").await.unwrap(), None);

        store
            .put("pokeapi:pokemon:pikachu", &resource(r#"{"id":25}"#))
            .await
            .unwrap();
        assert_eq!(
            store.get("pokeapi:pokemon:pikachu").await.unwrap(),
            Some(resource(r#"{"id":25}"#))
        );

        store
            .put("pokeapi:pokemon:pikachu", &resource(r#"{"id":25,"name":"pikachu"}"#))
            .await
            .unwrap();
        assert_eq!(
            store
                .get("pokeapi:pokemon:pikachu")
                .await
                .unwrap()
                .map(|r| r.body),
            Some(r#"{"id":25,"name":"pikachu"}"#.to_string())
        );

        store.remove("pokeapi:pokemon:pikachu").await.unwrap();
        assert_eq!(store.get("pokeapi:pokemon:pikachu").await.unwrap(), None);
    }

    #[tokio::test]
    async fn sqlite_in_memory_round_trip() {
        let store = SqliteCacheStore::in_memory().await.unwrap();
        exercise(&store).await;
    }

    #[tokio::test]
    async fn memory_store_round_trip() {
        exercise(&MemoryCacheStore::new()).await;
    }

    #[tokio::test]
    async fn sqlite_file_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.db");
        let path = path.to_str().unwrap();

        {
            let store = SqliteCacheStore::new(path).await.unwrap();
            store
                .put("pokeapi:move:tackle", &resource(r#"{"id":33}"#))
                .await
                .unwrap();
        }

        let reopened = SqliteCacheStore::new(path).await.unwrap();
        assert_eq!(
            reopened.get("pokeapi:move:tackle").await.unwrap(),
            Some(resource(r#"{"id":33}"#))
        );
    }
}
