//! Error types for the tracked cache
//!
//! Provides unified error handling using thiserror.

use std::num::{ParseFloatError, ParseIntError};
use std::string::FromUtf8Error;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the tracked cache.
///
/// Collaborator failures (store, HTTP) are carried through unchanged; nothing
/// in the crate retries or recovers locally.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failure reported by the Redis backend
    #[error(transparent)]
    Redis(#[from] redis::RedisError),

    /// Failure reported by the HTTP client
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Generic store failure
    #[error("Store error: {0}")]
    Store(String),

    /// Operation against a key holding the wrong kind of value
    #[error("Wrong type for key: {0}")]
    WrongType(String),

    /// Bytes are not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Bytes are not a base-10 integer literal
    #[error("Invalid integer: {0}")]
    ParseInt(#[from] ParseIntError),

    /// Bytes are not a float literal
    #[error("Invalid float: {0}")]
    ParseFloat(#[from] ParseFloatError),

    /// Caller-supplied decoder failed
    #[error("Decode error: {0}")]
    Decode(String),

    /// Key not found
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl CacheError {
    /// Returns true for the decode family (UTF-8, integer, float, custom).
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            CacheError::Utf8(_)
                | CacheError::ParseInt(_)
                | CacheError::ParseFloat(_)
                | CacheError::Decode(_)
        )
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::Http(_) => StatusCode::BAD_GATEWAY,
            e if e.is_decode() => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the tracked cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_family() {
        let err: CacheError = "abc".parse::<i64>().unwrap_err().into();
        assert!(err.is_decode());
        assert!(CacheError::Decode("bad".to_string()).is_decode());
        assert!(!CacheError::NotFound("k".to_string()).is_decode());
    }

    #[test]
    fn test_status_mapping() {
        let resp = CacheError::NotFound("k".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = CacheError::InvalidRequest("bad".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let err: CacheError = "x".parse::<f64>().unwrap_err().into();
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = CacheError::Store("down".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
