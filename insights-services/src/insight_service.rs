//! AI-powered headline analysis
//!
//! Sends the headline list to the configured completion provider as a single
//! prompt and parses the reply into at most five trading insights. Missing
//! credentials, upstream failures, timeouts and malformed replies all fall
//! back to the built-in sample insights.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use insights_ai::{build_insight_prompt, parse_insights, CompletionProvider, CompletionRequest};
use insights_core::{sample_insights, Headline, InsightsError, InsightsResult, Sourced, TradingInsight};

/// Default bound on a single model call
pub const DEFAULT_AI_TIMEOUT: Duration = Duration::from_secs(30);

/// Insight generator with sample-data fallback
#[derive(Clone)]
pub struct InsightService {
    /// `None` when no model credential is configured
    provider: Option<Arc<dyn CompletionProvider>>,
    timeout: Duration,
}

impl InsightService {
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>, timeout: Duration) -> Self {
        info!(
            "Initializing InsightService (provider: {}, timeout: {:?})",
            provider
                .as_ref()
                .map(|p| format!("{}/{}", p.name(), p.model()))
                .unwrap_or_else(|| "none, sample data".to_string()),
            timeout
        );
        Self { provider, timeout }
    }

    /// Service that always serves sample insights
    pub fn sample_only() -> Self {
        Self::new(None, DEFAULT_AI_TIMEOUT)
    }

    /// Generate trading insights for `headlines`
    #[instrument(skip(self, headlines), fields(headline_count = headlines.len()))]
    pub async fn generate_insights(
        &self,
        headlines: &[Headline],
    ) -> InsightsResult<Sourced<Vec<TradingInsight>>> {
        match self.generate_live(headlines).await {
            Ok(insights) => {
                info!("Generated {} live insights", insights.len());
                Ok(Sourced::live(insights))
            }
            Err(e) if e.is_recoverable() => {
                warn!("Using sample insights: {}", e);
                Ok(Sourced::fallback(sample_insights()))
            }
            Err(e) => Err(e),
        }
    }

    async fn generate_live(&self, headlines: &[Headline]) -> InsightsResult<Vec<TradingInsight>> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| InsightsError::credential_missing("model API key"))?;

        if headlines.is_empty() {
            debug!("No headlines to analyze");
            return Ok(Vec::new());
        }

        let request = CompletionRequest::new(build_insight_prompt(headlines)?);

        let reply = tokio::time::timeout(self.timeout, provider.complete(&request))
            .await
            .map_err(|_| InsightsError::timeout(provider.name(), self.timeout.as_secs()))??;

        debug!("Model reply: {} chars", reply.len());

        parse_insights(&reply, headlines)
    }
}
