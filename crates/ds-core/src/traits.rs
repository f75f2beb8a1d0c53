//! # Core Traits (Ports)
//!
//! Any store plugin must implement these traits to be used by the binary.

use async_trait::async_trait;

/// Durable key/value persistence contract. Each key holds one logical
/// collection serialized as JSON; mutations replace the full value.
///
/// Contract: `put(k, v)` followed by `get(k)` yields `Some(v)`; a key that
/// was never written reads as `None`, never as an error.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn put(&self, key: &str, value: String) -> anyhow::Result<()>;
}

/// Id generation contract, injected wherever records are materialized so
/// tests can pin ids and production ids are collision-free.
pub trait IdSource: Send + Sync {
    /// Strictly increasing integer id, safe to call twice within the
    /// same millisecond.
    fn next_record_id(&self) -> i64;

    /// Globally unique string id.
    fn next_token(&self) -> String;
}
