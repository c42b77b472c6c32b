mod config;
mod document;
mod errors;
mod pipeline;
mod report;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::pipeline::run_pipeline;
use crate::routes::build_router;
use crate::scoring::scorer::TokenOverlapScorer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed PORT / ESCAPE_REPORT_HTML)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS score v{}", env!("CARGO_PKG_VERSION"));

    // Score once, before serving; any failure here is fatal
    let report = run_pipeline(&config, &TokenOverlapScorer).inspect_err(|e| error!("{e:#}"))?;
    info!(
        "Scored {} against {}",
        report.resume_path.display(),
        report.job_description_path.display()
    );

    let state = AppState {
        config: config.clone(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
