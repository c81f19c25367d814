//! HTTP API server

use axum::routing::any;
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Fixed callback path expected by push-protocol terminals
pub const PUNCH_PATH: &str = "/hdata.aspx";

/// Build the API router using the provided application state
///
/// The callback path is registered for every method so the handler can answer
/// non-POST requests with the same empty 404 the fallback produces.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(PUNCH_PATH, any(handlers::punch_callback))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
