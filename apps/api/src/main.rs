mod catalog;
mod config;
mod errors;
mod llm_client;
mod models;
mod recommendation;
mod routes;
mod state;
mod views;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::JobCatalog;
use crate::config::Config;
use crate::llm_client::{ChatCompletion, LlmClient};
use crate::recommendation::heuristic::{HeuristicRecommender, RuleTable};
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

    info!("Starting CareerLens API v{}", env!("CARGO_PKG_VERSION"));

    if let Some(reason) = &config.secrets_error {
        warn!("Ignoring secrets file {reason}");
    }

    // The catalog is mandatory: without it nothing can be served.
    let catalog = JobCatalog::load(&config.jobs_data_path).with_context(|| {
        format!(
            "Failed to load job catalog from {}",
            config.jobs_data_path.display()
        )
    })?;

    let rules = match &config.survey_rules_path {
        Some(path) => {
            info!("Loading survey rule table from {}", path.display());
            RuleTable::load(path)?
        }
        None => RuleTable::default(),
    };

    let llm: Option<Arc<dyn ChatCompletion>> = match config.llm_settings() {
        Some(settings) => {
            let client = LlmClient::new(settings).context("Failed to build LLM HTTP client")?;
            info!("LLM recommendations enabled (model: {})", client.model());
            Some(Arc::new(client))
        }
        None => {
            info!(
                "No OPENAI_API_KEY in {} or the environment; heuristic recommendations only",
                config.secrets_path.display()
            );
            None
        }
    };

    let state = AppState {
        catalog: Arc::new(catalog),
        heuristic: Arc::new(HeuristicRecommender::new(rules)),
        llm,
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
