mod companies;
mod config;
mod errors;
mod jobs;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::companies::Registry;
use crate::config::Config;
use crate::jobs::dispatcher::Dispatcher;
use crate::jobs::runner::JobRunner;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AgentHire API v{}", env!("CARGO_PKG_VERSION"));

    // Company registry is validated once and read-only afterwards
    let registry = Arc::new(Registry::builtin()?);
    info!(
        "Registry loaded: {} companies, {} job types",
        registry.companies().count(),
        registry.total_job_types()
    );

    let llm = LlmClient::new(
        config.anthropic_api_key.clone(),
        config.anthropic_api_url.clone(),
    )?;
    if llm.has_api_key() {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("ANTHROPIC_API_KEY is not set; submitted jobs will fail until it is configured");
    }

    let dispatcher = Dispatcher::new(registry, Arc::new(llm));
    let runner = JobRunner::new(dispatcher, config.max_concurrent_jobs);
    info!("Job pool size: {}", config.max_concurrent_jobs);

    let state = AppState {
        runner,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
