//! Response DTOs for the HTTP API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the STORE operation (POST /store)
#[derive(Debug, Clone, Serialize)]
pub struct StoreResponse {
    /// The generated key
    pub key: String,
}

impl StoreResponse {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Response body for the GET operation (GET /get/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The decoded value
    pub value: serde_json::Value,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for the page counter (GET /page/count)
#[derive(Debug, Clone, Serialize)]
pub struct PageCountResponse {
    pub url: String,
    pub count: i64,
}

impl PageCountResponse {
    pub fn new(url: impl Into<String>, count: i64) -> Self {
        Self {
            url: url.into(),
            count,
        }
    }
}

/// Response body for the CLEAR operation (POST /clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
}

impl ClearResponse {
    pub fn cleared() -> Self {
        Self {
            message: "Cache cleared".to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_response_serialize() {
        let resp = StoreResponse::new("abc-123");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"key":"abc-123"}"#);
    }

    #[test]
    fn test_get_response_serialize() {
        let resp = GetResponse::new("k", 42);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["key"], "k");
        assert_eq!(json["value"], 42);
    }

    #[test]
    fn test_page_count_response_serialize() {
        let resp = PageCountResponse::new("http://a.test", 3);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["count"], 3);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
