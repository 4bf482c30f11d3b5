//! Store Entry Module
//!
//! Defines a single in-memory store entry with TTL support.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

// == Stored Data ==
/// Payload held under a key: a scalar byte string or a list of them.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredData {
    Scalar(Vec<u8>),
    List(VecDeque<Vec<u8>>),
}

// == Store Entry ==
/// Represents a single store entry with payload and metadata.
#[derive(Debug, Clone)]
pub struct StoreEntry {
    /// The stored payload
    pub data: StoredData,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl StoreEntry {
    // == Constructor ==
    /// Creates a new entry with optional TTL.
    ///
    /// # Arguments
    /// * `data` - The payload to store
    /// * `ttl_seconds` - Optional TTL in seconds
    ///
    /// Lifetimes too long to represent saturate at the far end of time.
    pub fn new(data: StoredData, ttl_seconds: Option<u64>) -> Self {
        let expires_at = ttl_seconds
            .map(|ttl| current_timestamp_ms().saturating_add(ttl.saturating_mul(1000)));

        Self { data, expires_at }
    }

    /// Creates a scalar entry without expiration.
    pub fn scalar(value: Vec<u8>) -> Self {
        Self::new(StoredData::Scalar(value), None)
    }

    /// Creates an empty list entry without expiration.
    pub fn list() -> Self {
        Self::new(StoredData::List(VecDeque::new()), None)
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time is greater than or equal to
    /// its expiration time.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, or None if no expiration is set.
    ///
    /// # Returns
    /// - `Some(0)` if the entry has expired (TTL elapsed)
    /// - `Some(remaining_ms)` if the entry has TTL and hasn't expired
    /// - `None` if the entry has no TTL (never expires)
    pub fn ttl_remaining_ms(&self) -> Option<u64> {
        self.expires_at
            .map(|expires| expires.saturating_sub(current_timestamp_ms()))
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation_no_ttl() {
        let entry = StoreEntry::scalar(b"test_value".to_vec());

        assert_eq!(entry.data, StoredData::Scalar(b"test_value".to_vec()));
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let entry = StoreEntry::new(StoredData::Scalar(b"v".to_vec()), Some(60));

        assert!(entry.expires_at.is_some());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = StoreEntry::new(StoredData::Scalar(b"v".to_vec()), Some(1));

        assert!(!entry.is_expired());

        sleep(Duration::from_millis(1100));

        assert!(entry.is_expired());
        assert_eq!(entry.ttl_remaining_ms(), Some(0));
    }

    #[test]
    fn test_ttl_remaining_ms() {
        let entry = StoreEntry::new(StoredData::Scalar(b"v".to_vec()), Some(10));

        let remaining_ms = entry.ttl_remaining_ms().unwrap();
        assert!(remaining_ms <= 10_000);
        assert!(remaining_ms >= 9_000);
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let entry = StoreEntry::new(StoredData::Scalar(b"v".to_vec()), Some(u64::MAX / 10));

        assert_eq!(entry.expires_at, Some(u64::MAX));
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_list_entry_never_expires() {
        let entry = StoreEntry::list();

        assert_eq!(entry.data, StoredData::List(VecDeque::new()));
        assert!(entry.ttl_remaining_ms().is_none());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = current_timestamp_ms();
        let entry = StoreEntry {
            data: StoredData::Scalar(b"test".to_vec()),
            expires_at: Some(now),
        };

        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }
}
