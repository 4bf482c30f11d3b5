//! Page Cache Module
//!
//! Wraps a page-fetching operation with request counting and an expiring
//! store-side copy of each body.

use async_trait::async_trait;
use tracing::debug;

use crate::config::DEFAULT_PAGE_TTL;
use crate::error::Result;
use crate::store::SharedStore;
use crate::tracking::Operation;

/// Counter key for requests to `url`.
pub fn count_key(url: &str) -> String {
    format!("count:{}", url)
}

// == Page Cache ==
/// Serves page bodies from the store while they are fresh.
///
/// Each fetch increments `count:<url>` first, hit or miss. A miss calls the
/// inner operation and stores the body under the URL with an absolute TTL;
/// hits do not extend it. Concurrent misses on one URL all fetch and the last
/// write wins.
pub struct PageCache<O> {
    inner: O,
    store: SharedStore,
    ttl_secs: u64,
}

impl<O> PageCache<O>
where
    O: Operation<Args = String, Output = String>,
{
    /// Wraps `inner` with the default 10-second lifetime.
    pub fn new(inner: O, store: SharedStore) -> Self {
        Self::with_ttl(inner, store, DEFAULT_PAGE_TTL)
    }

    /// Wraps `inner` with a lifetime of `ttl_secs` per cached body.
    ///
    /// The lifetime is at least one second.
    pub fn with_ttl(inner: O, store: SharedStore, ttl_secs: u64) -> Self {
        Self {
            inner,
            store,
            ttl_secs: ttl_secs.max(1),
        }
    }

    // == Fetch ==
    /// Returns the body of `url`, from cache when fresh.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let count = self.store.incr(&count_key(url)).await?;

        // An empty cached body counts as a miss.
        if let Some(cached) = self.store.get(url).await? {
            if !cached.is_empty() {
                debug!("Page cache hit: {} (request #{})", url, count);
                return Ok(String::from_utf8_lossy(&cached).into_owned());
            }
        }

        debug!("Page cache miss: {} (request #{})", url, count);
        let body = self.inner.call(url.to_string()).await?;
        self.store.setex(url, self.ttl_secs, body.as_bytes()).await?;
        Ok(body)
    }

    // == Request Count ==
    /// Returns how many times `url` was requested, 0 if never.
    pub async fn request_count(&self, url: &str) -> Result<i64> {
        match self.store.get(&count_key(url)).await? {
            Some(raw) => Ok(String::from_utf8(raw)?.trim().parse()?),
            None => Ok(0),
        }
    }

    /// Returns the cache lifetime in seconds.
    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }
}

#[async_trait]
impl<O> Operation for PageCache<O>
where
    O: Operation<Args = String, Output = String>,
{
    type Args = String;
    type Output = String;

    fn qualified_name(&self) -> &str {
        self.inner.qualified_name()
    }

    async fn call(&self, url: String) -> Result<String> {
        self.fetch(&url).await
    }
}
