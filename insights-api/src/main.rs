//! AI Trading Insights API Server
//!
//! HTTP API server that fetches finance headlines and asks an LLM for
//! trading insights on them.

mod config;
mod error;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use insights_ai::{AnthropicClient, CompletionProvider, OpenAIClient};
use insights_core::InsightsResult;
use insights_news::{HeadlineProvider, NewsApiClient};
use insights_services::{AnalysisPipeline, HeadlineService, InsightService};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{AiConfig, AiProvider, AppConfig, NewsConfig};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<AnalysisPipeline>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables; missing files are fine
    for file in [".env.local", ".env"] {
        if let Err(e) = dotenvy::from_filename(file) {
            if !e.not_found() {
                eprintln!("Warning: Failed to load {}: {}", file, e);
            }
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,insights_api=debug")),
        )
        .init();

    info!("Starting AI Trading Insights API");

    let config = AppConfig::from_env()?;

    let headline_service = HeadlineService::new(news_provider(&config.news)?, config.news.timeout);
    let insight_service = InsightService::new(completion_provider(&config.ai)?, config.ai.timeout);

    let state = AppState {
        pipeline: Arc::new(AnalysisPipeline::new(headline_service, insight_service)),
    };

    let app = routes::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// NewsAPI client, or `None` when NEWS_API_KEY is not set
fn news_provider(config: &NewsConfig) -> InsightsResult<Option<Arc<dyn HeadlineProvider>>> {
    let Some(api_key) = config.api_key.clone() else {
        warn!("NEWS_API_KEY not set - serving sample headlines");
        return Ok(None);
    };

    let client = NewsApiClient::new(api_key, &config.base_url, config.timeout)?;
    info!("NewsAPI credentials found ({})", config.base_url);
    Ok(Some(Arc::new(client)))
}

/// Completion client for the configured provider, or `None` without a key
fn completion_provider(config: &AiConfig) -> InsightsResult<Option<Arc<dyn CompletionProvider>>> {
    let Some(api_key) = config.api_key.clone() else {
        warn!(
            "{} not set - serving sample insights",
            config.provider.key_var()
        );
        return Ok(None);
    };

    let provider: Arc<dyn CompletionProvider> = match config.provider {
        AiProvider::Anthropic => {
            let base_url = config
                .base_url
                .as_deref()
                .unwrap_or(insights_ai::anthropic::DEFAULT_BASE_URL);
            let client = AnthropicClient::new(api_key, base_url, config.timeout)?;
            match config.model.as_deref() {
                Some(model) => Arc::new(client.with_model(model)),
                None => Arc::new(client),
            }
        }
        AiProvider::OpenAI => {
            let client = OpenAIClient::new(api_key, config.base_url.as_deref(), config.timeout)?;
            match config.model.as_deref() {
                Some(model) => Arc::new(client.with_model(model)),
                None => Arc::new(client),
            }
        }
    };

    info!(
        "Using {} model {} for analysis",
        config.provider,
        provider.model()
    );
    Ok(Some(provider))
}
