//! HTTP surface: `/`, `/search` and `/results`.

pub mod health;
pub mod results;
pub mod search;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router. Cross-origin requests are allowed from
/// any origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/search", post(search::search))
        .route("/results", get(results::list_results))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
