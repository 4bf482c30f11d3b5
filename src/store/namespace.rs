//! Namespaced Store Module
//!
//! Partitions a shared key space by prefixing every key.

use async_trait::async_trait;

use crate::error::Result;
use crate::store::{KvStore, SharedStore};

// == Namespaced ==
/// Wraps a store so every key is written under `prefix`.
///
/// `flush_all` on a namespaced store only removes keys under its prefix.
/// An empty prefix passes everything through, including the full flush.
pub struct Namespaced {
    inner: SharedStore,
    prefix: String,
}

impl Namespaced {
    /// Creates a namespaced view over `inner`.
    pub fn new(inner: SharedStore, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

#[async_trait]
impl KvStore for Namespaced {
    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.inner.set(&self.key(key), value).await
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.inner.get(&self.key(key)).await
    }

    async fn incr(&self, key: &str) -> Result<i64> {
        self.inner.incr(&self.key(key)).await
    }

    async fn rpush(&self, key: &str, value: &[u8]) -> Result<usize> {
        self.inner.rpush(&self.key(key), value).await
    }

    async fn lrange(&self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        self.inner.lrange(&self.key(key), start, stop).await
    }

    async fn setex(&self, key: &str, ttl_secs: u64, value: &[u8]) -> Result<()> {
        self.inner.setex(&self.key(key), ttl_secs, value).await
    }

    async fn flush_all(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return self.inner.flush_all().await;
        }
        self.inner.delete_prefix(&self.prefix).await.map(|_| ())
    }

    async fn delete_prefix(&self, prefix: &str) -> Result<usize> {
        self.inner.delete_prefix(&self.key(prefix)).await
    }
}
