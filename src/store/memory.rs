//! In-Memory Store Module
//!
//! HashMap-backed implementation of [`KvStore`] with lazy TTL expiration.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{CacheError, Result};
use crate::store::{resolve_range, KvStore, StoreEntry, StoredData};

// == Memory Store ==
/// In-process key-value store.
///
/// Expired entries are treated as absent on access and dropped there;
/// [`MemoryStore::cleanup_expired`] sweeps the rest.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, StoreEntry>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries.
    ///
    /// Returns the number of entries removed.
    pub async fn cleanup_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    // == TTL ==
    /// Returns the remaining lifetime of `key` in milliseconds.
    ///
    /// `None` if the key is absent or has no expiration.
    pub async fn ttl_remaining_ms(&self, key: &str) -> Option<u64> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .and_then(StoreEntry::ttl_remaining_ms)
    }

    // == Length ==
    /// Returns the number of live entries.
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.values().filter(|entry| !entry.is_expired()).count()
    }

    // == Is Empty ==
    /// Returns true if the store holds no live entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Drops `key` if it has expired, so the caller sees it as absent.
fn evict_if_expired(entries: &mut HashMap<String, StoreEntry>, key: &str) {
    if entries.get(key).is_some_and(StoreEntry::is_expired) {
        entries.remove(key);
        debug!("Expired key dropped: {}", key);
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), StoreEntry::scalar(value.to_vec()));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut entries = self.entries.write().await;
        evict_if_expired(&mut entries, key);

        match entries.get(key) {
            None => Ok(None),
            Some(StoreEntry {
                data: StoredData::Scalar(value),
                ..
            }) => Ok(Some(value.clone())),
            Some(_) => Err(CacheError::WrongType(key.to_string())),
        }
    }

    async fn incr(&self, key: &str) -> Result<i64> {
        let mut entries = self.entries.write().await;
        evict_if_expired(&mut entries, key);

        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| StoreEntry::scalar(b"0".to_vec()));

        // INCR keeps an existing TTL.
        let StoredData::Scalar(raw) = &mut entry.data else {
            return Err(CacheError::WrongType(key.to_string()));
        };

        let current: i64 = std::str::from_utf8(raw)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| CacheError::Store(format!("value at '{}' is not an integer", key)))?;
        let next = current
            .checked_add(1)
            .ok_or_else(|| CacheError::Store(format!("increment at '{}' overflows", key)))?;

        *raw = next.to_string().into_bytes();
        Ok(next)
    }

    async fn rpush(&self, key: &str, value: &[u8]) -> Result<usize> {
        let mut entries = self.entries.write().await;
        evict_if_expired(&mut entries, key);

        let entry = entries
            .entry(key.to_string())
            .or_insert_with(StoreEntry::list);

        match &mut entry.data {
            StoredData::List(list) => {
                list.push_back(value.to_vec());
                Ok(list.len())
            }
            StoredData::Scalar(_) => Err(CacheError::WrongType(key.to_string())),
        }
    }

    async fn lrange(&self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        let mut entries = self.entries.write().await;
        evict_if_expired(&mut entries, key);

        match entries.get(key) {
            None => Ok(Vec::new()),
            Some(StoreEntry {
                data: StoredData::List(list),
                ..
            }) => Ok(match resolve_range(list.len(), start, stop) {
                Some((from, to)) => list.range(from..=to).cloned().collect(),
                None => Vec::new(),
            }),
            Some(_) => Err(CacheError::WrongType(key.to_string())),
        }
    }

    async fn setex(&self, key: &str, ttl_secs: u64, value: &[u8]) -> Result<()> {
        if ttl_secs == 0 {
            return Err(CacheError::InvalidRequest(
                "invalid expire time in 'setex' command".to_string(),
            ));
        }

        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            StoreEntry::new(StoredData::Scalar(value.to_vec()), Some(ttl_secs)),
        );
        Ok(())
    }

    async fn flush_all(&self) -> Result<()> {
        let mut entries = self.entries.write().await;
        let removed = entries.len();
        entries.clear();
        debug!("Flushed {} keys", removed);
        Ok(())
    }

    async fn delete_prefix(&self, prefix: &str) -> Result<usize> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        Ok(before - entries.len())
    }
}
