use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use bino_search::api::{AppState, create_router};
use bino_search::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bino_search=info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr();
    let port = config.port;

    let state = Arc::new(AppState::new(config)?);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server starting → open http://localhost:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}
