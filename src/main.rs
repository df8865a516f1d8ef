use anyhow::{Context, Result};
use lotte_widgets_rust::config::Config;
use lotte_widgets_rust::router::create_app_router;
use lotte_widgets_rust::widgets::AppState;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config.log_level);

    // Missing widget assets are fatal; nothing is served until every widget resolves
    let state = AppState::load(&config.assets_dir)
        .await
        .context("failed to load widgets")?;
    let state = Arc::new(state);

    // Build application router with all routes and middleware
    let app = create_app_router(state, config.static_dir.as_deref());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Installs the stderr subscriber. `RUST_LOG`, when set, overrides `level`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
