//! Cache Facade Module
//!
//! Randomly-keyed storage of scalar values with typed retrieval. `store` is
//! tracked: every call is counted and recorded under [`STORE_OPERATION`].

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::cache::decode;
use crate::error::Result;
use crate::store::SharedStore;
use crate::tracking::{replay, Counted, Operation, OperationExt, Recorded, ReplayReport};
use crate::value::Value;

/// Qualified name of the tracked store operation.
pub const STORE_OPERATION: &str = "Cache.store";

// == Raw Store Operation ==
/// Writes a value under a fresh v4 UUID key and returns the key.
pub struct StoreValue {
    store: SharedStore,
}

#[async_trait]
impl Operation for StoreValue {
    type Args = Value;
    type Output = String;

    fn qualified_name(&self) -> &str {
        STORE_OPERATION
    }

    async fn call(&self, value: Value) -> Result<String> {
        let key = Uuid::new_v4().to_string();
        self.store.set(&key, &value.to_bytes()).await?;
        Ok(key)
    }
}

// == Cache ==
/// Caching facade over a key-value store.
pub struct Cache {
    store: SharedStore,
    store_op: Recorded<Counted<StoreValue>>,
}

impl Cache {
    // == Constructor ==
    /// Creates a cache over `store` and clears its key space.
    ///
    /// Clearing covers the whole database unless `store` is a
    /// [`Namespaced`](crate::store::Namespaced) view, in which case only
    /// that namespace is removed.
    pub async fn new(store: SharedStore) -> Result<Self> {
        let cache = Self::without_reset(store);
        cache.clear().await?;
        info!("Cache initialized, key space cleared");
        Ok(cache)
    }

    /// Creates a cache over `store` leaving existing keys in place.
    pub fn without_reset(store: SharedStore) -> Self {
        let store_op = StoreValue {
            store: store.clone(),
        }
        .counted(store.clone())
        .recorded(store.clone());

        Self { store, store_op }
    }

    // == Clear ==
    /// Removes every key in the cache's key space.
    pub async fn clear(&self) -> Result<()> {
        self.store.flush_all().await
    }

    // == Store ==
    /// Stores `value` under a new random key and returns that key.
    pub async fn store(&self, value: impl Into<Value>) -> Result<String> {
        let key = self.store_op.call(value.into()).await?;
        debug!("Stored value under {}", key);
        Ok(key)
    }

    // == Get ==
    /// Returns the raw bytes stored under `key`, `None` if absent.
    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.store.get(key).await
    }

    /// Returns the value under `key` passed through `decode`, `None` if absent.
    pub async fn get_with<T, F>(&self, key: &str, decode: F) -> Result<Option<T>>
    where
        F: FnOnce(Vec<u8>) -> Result<T>,
    {
        self.get(key).await?.map(decode).transpose()
    }

    /// Decodes bytes as UTF-8 text.
    pub fn get_str(&self, data: Vec<u8>) -> Result<String> {
        decode::to_str(data)
    }

    /// Decodes bytes as a base-10 integer.
    pub fn get_int(&self, data: Vec<u8>) -> Result<i64> {
        decode::to_int(&data)
    }

    /// Decodes bytes as a float.
    pub fn get_float(&self, data: Vec<u8>) -> Result<f64> {
        decode::to_float(&data)
    }

    // == Replay ==
    /// Returns the call history of [`Cache::store`].
    pub async fn replay_store(&self) -> Result<ReplayReport> {
        replay(self.store.as_ref(), STORE_OPERATION).await
    }

    /// Returns the backing store handle.
    pub fn backing_store(&self) -> &SharedStore {
        &self.store
    }
}
