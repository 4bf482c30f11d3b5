//! API Routes
//!
//! Configures the Axum router with all endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, get_handler, health_handler, page_count_handler, page_handler,
    replay_handler, store_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /store` - Store a value under a random key
/// - `GET /get/:key` - Retrieve and decode a value
/// - `GET /replay/:name` - Call history of a tracked operation
/// - `GET /page?url=` - Fetch a page through the cache
/// - `GET /page/count?url=` - Request count for a URL
/// - `POST /clear` - Clear the cache's key space
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/store", post(store_handler))
        .route("/get/:key", get(get_handler))
        .route("/replay/:name", get(replay_handler))
        .route("/page", get(page_handler))
        .route("/page/count", get(page_count_handler))
        .route("/clear", post(clear_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
