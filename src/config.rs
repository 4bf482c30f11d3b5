//! Configuration Module
//!
//! Handles loading and managing configuration from environment variables.

use std::env;

/// Default lifetime of a cached page, in seconds.
pub const DEFAULT_PAGE_TTL: u64 = 10;

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL; `None` selects the in-memory backend
    pub redis_url: Option<String>,
    /// Prefix applied to every key; empty means the whole database
    pub key_prefix: String,
    /// Cached page lifetime in seconds
    pub page_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Expiry sweep interval in seconds (in-memory backend only)
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_URL` - Redis connection URL (default: unset, in-memory store)
    /// - `KEY_PREFIX` - Key namespace prefix (default: empty)
    /// - `PAGE_TTL` - Cached page lifetime in seconds (default: 10, also used for 0)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        Self {
            redis_url: env::var("REDIS_URL").ok().filter(|v| !v.is_empty()),
            key_prefix: env::var("KEY_PREFIX").unwrap_or_default(),
            page_ttl: parse_page_ttl(env::var("PAGE_TTL").ok()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
        }
    }
}

/// Parses a page lifetime; missing, invalid or zero values use the default.
fn parse_page_ttl(raw: Option<String>) -> u64 {
    raw.and_then(|v| v.trim().parse().ok())
        .filter(|&ttl: &u64| ttl > 0)
        .unwrap_or(DEFAULT_PAGE_TTL)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: None,
            key_prefix: String::new(),
            page_ttl: DEFAULT_PAGE_TTL,
            server_port: 3000,
            cleanup_interval: 1,
        }
    }
}
