//! Cache Module
//!
//! The caching facade: randomly-keyed storage of scalar values, typed
//! retrieval, and tracked `store` calls.

pub mod decode;
mod facade;


// Re-export public types
pub use facade::{Cache, StoreValue, STORE_OPERATION};
