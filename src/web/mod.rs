//! Web Module
//!
//! Fetching pages over HTTP, with a store-backed expiring cache and a
//! per-URL request counter.

mod http;
mod page_cache;

pub use http::HttpGet;
pub use page_cache::{count_key, PageCache};
