//! Store Module
//!
//! The key-value store the cache talks to, as a trait over the handful of
//! primitives it needs, with an in-memory backend, a Redis backend and a
//! key-namespacing wrapper.

mod entry;
mod memory;
mod namespace;
mod redis;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

pub use entry::{StoreEntry, StoredData};
pub use memory::MemoryStore;
pub use namespace::Namespaced;
pub use self::redis::RedisStore;

// == Key-Value Store ==
/// Primitives of the backing key-value store.
///
/// Each call is atomic on its own; sequences of calls are not.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Writes `value` under `key`, replacing any previous value and TTL.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Reads the value under `key`, `None` if absent or expired.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Increments the integer under `key` by one, creating it at zero first.
    async fn incr(&self, key: &str) -> Result<i64>;

    /// Appends `value` to the list under `key`; returns the new length.
    async fn rpush(&self, key: &str, value: &[u8]) -> Result<usize>;

    /// Returns list elements between `start` and `stop` inclusive.
    /// Negative indexes count from the end (`-1` is the last element).
    async fn lrange(&self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>>;

    /// Writes `value` under `key` with an absolute lifetime of `ttl_secs`.
    async fn setex(&self, key: &str, ttl_secs: u64, value: &[u8]) -> Result<()>;

    /// Removes every key in the database.
    async fn flush_all(&self) -> Result<()>;

    /// Removes every key starting with `prefix`; returns how many were removed.
    async fn delete_prefix(&self, prefix: &str) -> Result<usize>;
}

/// Shared handle to a store backend.
pub type SharedStore = Arc<dyn KvStore>;

/// Resolves `lrange` bounds against a list of `len` elements.
///
/// Returns `None` when the range selects nothing.
pub(crate) fn resolve_range(len: usize, start: isize, stop: isize) -> Option<(usize, usize)> {
    let len = len as isize;
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };

    if len == 0 || start > stop || start >= len || stop < 0 {
        None
    } else {
        Some((start as usize, stop as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_full_range() {
        assert_eq!(resolve_range(3, 0, -1), Some((0, 2)));
    }

    #[test]
    fn test_resolve_clamped_range() {
        assert_eq!(resolve_range(3, 1, 10), Some((1, 2)));
        assert_eq!(resolve_range(3, -10, 0), Some((0, 0)));
    }

    #[test]
    fn test_resolve_empty_range() {
        assert_eq!(resolve_range(0, 0, -1), None);
        assert_eq!(resolve_range(3, 2, 1), None);
        assert_eq!(resolve_range(3, 5, 7), None);
        assert_eq!(resolve_range(3, 0, -5), None);
    }
}
