use anyhow::Context;
use log::info;
use pagepulse::api::build_router;
use pagepulse::models::AppState;
use pagepulse::services::{Session, StubAnalysisService};
use pagepulse::Config;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let service = StubAnalysisService::new(config.analysis_delay);
    let session = Session::new(Arc::new(service));
    let shared_state = Arc::new(AppState::new(session));

    let app = build_router(shared_state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;
    info!("🚀 Server running on http://{}", config.addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
