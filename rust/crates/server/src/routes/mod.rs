//! HTTP routes.

mod health;

use axum::{Router, routing::get};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub use health::health;

/// Build the router serving `dist`.
///
/// Paths without a matching file fall back to `index.html` so client-side
/// routes such as `/users` survive a reload.
pub fn build_router(dist: &Path) -> Router {
    let index = ServeFile::new(dist.join("index.html"));
    let assets = ServeDir::new(dist)
        .append_index_html_on_directories(true)
        .fallback(index);

    Router::new()
        .route("/healthz", get(health))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}
