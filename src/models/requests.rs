//! Request DTOs for the HTTP API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::value::Value;

/// A JSON scalar accepted as a stored value.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum JsonScalar {
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<JsonScalar> for Value {
    fn from(scalar: JsonScalar) -> Self {
        match scalar {
            JsonScalar::Int(i) => Value::Int(i),
            JsonScalar::Float(f) => Value::Float(f),
            JsonScalar::Str(s) => Value::Str(s),
        }
    }
}

/// Request body for the STORE operation (POST /store)
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRequest {
    /// The value to store
    pub value: JsonScalar,
}

/// How GET /get/:key decodes the stored bytes.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Decoding {
    #[default]
    Str,
    Int,
    Float,
}

/// Query string for GET /get/:key
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetQuery {
    #[serde(default)]
    pub decode: Decoding,
}

/// Query string for the page endpoints (GET /page, GET /page/count)
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    pub url: String,
}

impl PageQuery {
    /// Validates the query
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.url.is_empty() {
            return Some("URL cannot be empty".to_string());
        }
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Some("URL must use http or https".to_string());
        }
        None
    }
}
