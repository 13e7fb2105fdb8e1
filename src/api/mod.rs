use anyhow::{Context, Result};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::Config;

pub mod error;
pub mod handlers;
pub mod models;
pub mod pages;

/// Shared, read-only state built once at start-up.
pub struct AppState {
    pub config: Config,
    pub home_page: String,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let home_page = pages::render_home().context("Failed to render home page")?;
        Ok(Self { config, home_page })
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(handlers::home_handler))
        .route("/generate", get(handlers::generate_handler))
        .fallback(handlers::home_handler)
        .with_state(state)
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
}
