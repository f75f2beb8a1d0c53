//! # ds-kv-sqlite
//!
//! Embedded-database implementation of `KvStore`: a single
//! `kv(key, value)` table in SQLite, upserted on every put.

use async_trait::async_trait;
use ds_core::traits::KvStore;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;

pub struct SqliteKvStore {
    pool: SqlitePool,
}

impl SqliteKvStore {
    /// Connects and ensures the table exists. Use `sqlite::memory:` for
    /// an ephemeral store.
    pub async fn new(url: &str) -> anyhow::Result<Self> {
        let pool = SqlitePool::connect(url).await?;
        sqlx::query("CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT NOT NULL)")
            .execute(&pool)
            .await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl KvStore for SqliteKvStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get("value")))
    }

    async fn put(&self, key: &str, value: String) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO kv (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let store = SqliteKvStore::new("sqlite::memory:").await.unwrap();
        assert_eq!(store.get("user-projects").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_is_an_upsert() {
        let store = SqliteKvStore::new("sqlite::memory:").await.unwrap();

        store.put("user-projects", "[]".to_string()).await.unwrap();
        store
            .put("user-projects", "[{\"id\":1}]".to_string())
            .await
            .unwrap();

        assert_eq!(
            store.get("user-projects").await.unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );
    }
}
