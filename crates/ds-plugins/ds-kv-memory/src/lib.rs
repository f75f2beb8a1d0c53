//! # ds-kv-memory
//!
//! In-memory implementation of `KvStore`. Nothing survives the process;
//! used as the test double and for ephemeral runs.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use ds_core::traits::KvStore;

#[derive(Debug, Default)]
pub struct MemoryKvStore {
    map: RwLock<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let map = self
            .map
            .read()
            .map_err(|_| anyhow::anyhow!("kv map lock poisoned"))?;
        Ok(map.get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> anyhow::Result<()> {
        let mut map = self
            .map
            .write()
            .map_err(|_| anyhow::anyhow!("kv map lock poisoned"))?;
        map.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trip_and_missing_key() {
        let store = MemoryKvStore::new();
        assert_eq!(store.get("absent").await.unwrap(), None);

        store.put("k", "[1,2,3]".to_string()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("[1,2,3]"));

        store.put("k", "[]".to_string()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("[]"));
    }
}
