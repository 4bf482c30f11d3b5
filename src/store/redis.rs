//! Redis Store Module
//!
//! Redis-backed implementation of [`KvStore`].

use ::redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use async_trait::async_trait;
use tracing::info;

use crate::error::Result;
use crate::store::KvStore;

// == Redis Store ==
/// Key-value store backed by a Redis server.
///
/// Holds one multiplexed connection that is cloned per command.
#[derive(Clone)]
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    /// Connects to the server at `url` (e.g. `redis://127.0.0.1:6379`).
    pub async fn connect(url: &str) -> Result<Self> {
        let client = Client::open(url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        info!("Connected to Redis at {}", url);
        Ok(Self { conn })
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let value: Option<Vec<u8>> = conn.get(key).await?;
        Ok(value)
    }

    async fn incr(&self, key: &str) -> Result<i64> {
        let mut conn = self.conn.clone();
        let value: i64 = conn.incr(key, 1).await?;
        Ok(value)
    }

    async fn rpush(&self, key: &str, value: &[u8]) -> Result<usize> {
        let mut conn = self.conn.clone();
        let len: usize = conn.rpush(key, value).await?;
        Ok(len)
    }

    async fn lrange(&self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let values: Vec<Vec<u8>> = conn.lrange(key, start, stop).await?;
        Ok(values)
    }

    async fn setex(&self, key: &str, ttl_secs: u64, value: &[u8]) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.set_ex(key, value, ttl_secs).await?;
        Ok(())
    }

    async fn flush_all(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        // Scoped to the selected database.
        let _: () = ::redis::cmd("FLUSHDB").query_async(&mut conn).await?;
        Ok(())
    }

    async fn delete_prefix(&self, prefix: &str) -> Result<usize> {
        let mut conn = self.conn.clone();
        let keys: Vec<String> = conn.keys(prefix_pattern(prefix)).await?;

        if keys.is_empty() {
            return Ok(0);
        }

        let deleted: usize = conn.del(&keys).await?;
        Ok(deleted)
    }
}

/// Builds a `KEYS` pattern matching every key that starts with `prefix`.
///
/// Glob metacharacters in the prefix are escaped so they match literally.
fn prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('*');
    pattern
}
