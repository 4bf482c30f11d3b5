//! API Module
//!
//! HTTP handlers and routing over the cache facade and the page cache.
//!
//! # Endpoints
//! - `POST /store` - Store a value under a random key
//! - `GET /get/:key` - Retrieve and decode a value
//! - `GET /replay/:name` - Call history of a tracked operation
//! - `GET /page?url=` - Fetch a page through the cache
//! - `GET /page/count?url=` - Request count for a URL
//! - `POST /clear` - Clear the cache's key space
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
