//! API Handlers
//!
//! HTTP request handlers exposing the cache facade and the page cache.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::json;
use tracing::info;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, Decoding, GetQuery, GetResponse, HealthResponse, PageCountResponse,
    PageQuery, StoreRequest, StoreResponse,
};
use crate::store::{MemoryStore, Namespaced, RedisStore, SharedStore};
use crate::tracking::replay;
use crate::web::{HttpGet, PageCache};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache facade
    pub cache: Arc<Cache>,
    /// Expiring page cache over plain HTTP GET
    pub pages: Arc<PageCache<HttpGet>>,
    /// In-memory backend, when one is in use
    pub memory: Option<Arc<MemoryStore>>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(cache: Cache, pages: PageCache<HttpGet>) -> Self {
        Self {
            cache: Arc::new(cache),
            pages: Arc::new(pages),
            memory: None,
        }
    }

    /// Creates a new AppState over an in-memory store.
    ///
    /// Clears the store, like every new [`Cache`].
    pub async fn in_memory(page_ttl: u64) -> Result<Self> {
        let memory = Arc::new(MemoryStore::new());
        let store: SharedStore = memory.clone();

        let cache = Cache::new(store.clone()).await?;
        let pages = PageCache::with_ttl(HttpGet::new(), store, page_ttl);

        let mut state = Self::new(cache, pages);
        state.memory = Some(memory);
        Ok(state)
    }

    /// Creates a new AppState from configuration.
    ///
    /// Connects to Redis when `redis_url` is set and falls back to the
    /// in-memory store otherwise. Keys are namespaced by `key_prefix`.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let mut memory = None;
        let backend: SharedStore = match &config.redis_url {
            Some(url) => Arc::new(RedisStore::connect(url).await?),
            None => {
                info!("REDIS_URL not set, using in-memory store");
                let store = Arc::new(MemoryStore::new());
                memory = Some(store.clone());
                store
            }
        };

        let store: SharedStore = Arc::new(Namespaced::new(backend, config.key_prefix.clone()));
        let cache = Cache::new(store.clone()).await?;
        let pages = PageCache::with_ttl(HttpGet::new(), store, config.page_ttl);

        let mut state = Self::new(cache, pages);
        state.memory = memory;
        Ok(state)
    }
}

/// Handler for POST /store
///
/// Stores a value under a new random key and returns the key.
pub async fn store_handler(
    State(state): State<AppState>,
    Json(req): Json<StoreRequest>,
) -> Result<Json<StoreResponse>> {
    let key = state.cache.store(req.value).await?;
    Ok(Json(StoreResponse::new(key)))
}

/// Handler for GET /get/:key
///
/// Reads a value and decodes it as text, integer or float.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<GetQuery>,
) -> Result<Json<GetResponse>> {
    let raw = state
        .cache
        .get(&key)
        .await?
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    let value = match query.decode {
        Decoding::Str => json!(state.cache.get_str(raw)?),
        Decoding::Int => json!(state.cache.get_int(raw)?),
        Decoding::Float => json!(state.cache.get_float(raw)?),
    };

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for GET /replay/:name
///
/// Returns the plain-text call history of a tracked operation.
pub async fn replay_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<String> {
    let report = replay(state.cache.backing_store().as_ref(), &name).await?;
    Ok(report.to_string())
}

/// Handler for GET /page?url=
///
/// Returns the page body, from cache while fresh.
///
/// Any http(s) URL is fetched, loopback and private hosts included. Bind the
/// server to a trusted interface or put it behind a filtering proxy when
/// those hosts must stay unreachable.
pub async fn page_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<String> {
    if let Some(error_msg) = query.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state.pages.fetch(&query.url).await
}

/// Handler for GET /page/count?url=
///
/// Returns how many times a URL was requested.
pub async fn page_count_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageCountResponse>> {
    let count = state.pages.request_count(&query.url).await?;
    Ok(Json(PageCountResponse::new(query.url, count)))
}

/// Handler for POST /clear
///
/// Removes every key in the cache's key space.
pub async fn clear_handler(State(state): State<AppState>) -> Result<Json<ClearResponse>> {
    state.cache.clear().await?;
    Ok(Json(ClearResponse::cleared()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
