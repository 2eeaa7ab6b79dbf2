//! Router assembly: `/api` routes, middleware layers and the SPA fallback.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get},
    Router,
};
use services::PortfolioService;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers;

/// State shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PortfolioService>,
}

#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Directory holding the built SPA (`index.html` plus assets)
    pub static_dir: PathBuf,
    pub max_body_bytes: usize,
}

pub fn build_router(service: Arc<PortfolioService>, options: &RouterOptions) -> Router {
    let state = AppState { service };

    let api = Router::new()
        .route("/content", get(handlers::list_works).post(handlers::create_work))
        .route("/content/{id}", delete(handlers::delete_work))
        .route("/reviews", get(handlers::list_reviews).post(handlers::create_review))
        .route("/reviews/{id}", delete(handlers::delete_review))
        .with_state(state);

    // Unknown paths get index.html so the client-side router can take over.
    let spa = ServeDir::new(&options.static_dir)
        .fallback(ServeFile::new(options.static_dir.join("index.html")));

    Router::new()
        .nest("/api", api)
        .fallback_service(spa)
        .layer(DefaultBodyLimit::max(options.max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
