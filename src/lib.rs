//! Tracked Cache - A caching facade over a key-value store
//!
//! Stores scalar values under random keys, counts and records every `store`
//! call for later replay, and caches fetched web pages for a fixed window.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;
pub mod tracking;
pub mod value;
pub mod web;

pub use api::AppState;
pub use cache::Cache;
pub use config::Config;
pub use error::{CacheError, Result};
pub use store::{KvStore, MemoryStore, Namespaced, SharedStore};
pub use tasks::spawn_cleanup_task;
pub use tracking::{replay, Operation, OperationExt, ReplayReport};
pub use value::Value;
pub use web::{HttpGet, PageCache};
