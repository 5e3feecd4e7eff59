//! Route table
//!
//! `/api/*` is answered by handlers. Everything else is a static file from
//! the configured directory, with `index.html` as the fallback so any path
//! loads the SPA. Only GET and HEAD are accepted outside `/api`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::ServerSettings;
use crate::handlers;
use crate::middleware::apply_middleware;
use crate::state::AppState;

/// Create the complete router with all routes
pub fn create_router(state: Arc<AppState>, settings: &ServerSettings) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/pages", get(handlers::pages::list_pages_handler))
        .fallback(api_not_found)
        .with_state(state.clone());

    let index = state.static_dir.join("index.html");
    let spa = ServeDir::new(&state.static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(index));

    let router = Router::new()
        .nest("/api", api_routes)
        .fallback_service(spa);

    apply_middleware(router, settings)
}

async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "not found" })),
    )
}
