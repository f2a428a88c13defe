//! Headline Service
//!
//! Fetches recent finance headlines from the configured provider and falls
//! back to the built-in sample list when the provider is missing, failing,
//! or too slow.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument, warn};

use insights_core::{sample_headlines, Headline, InsightsError, InsightsResult, Sourced};
use insights_news::HeadlineProvider;

/// Default bound on a single headline fetch
pub const DEFAULT_NEWS_TIMEOUT: Duration = Duration::from_secs(10);

/// Headline source with sample-data fallback
#[derive(Clone)]
pub struct HeadlineService {
    /// `None` when no news credential is configured
    provider: Option<Arc<dyn HeadlineProvider>>,
    timeout: Duration,
}

impl HeadlineService {
    pub fn new(provider: Option<Arc<dyn HeadlineProvider>>, timeout: Duration) -> Self {
        info!(
            "Initializing HeadlineService (provider: {}, timeout: {:?})",
            provider.as_ref().map(|p| p.name()).unwrap_or("none, sample data"),
            timeout
        );
        Self { provider, timeout }
    }

    /// Service that always serves sample headlines
    pub fn sample_only() -> Self {
        Self::new(None, DEFAULT_NEWS_TIMEOUT)
    }

    /// Fetch headlines, newest first.
    ///
    /// Only non-recoverable errors are returned; everything else becomes a
    /// `Fallback` result.
    #[instrument(skip(self))]
    pub async fn fetch_headlines(&self) -> InsightsResult<Sourced<Vec<Headline>>> {
        match self.fetch_live().await {
            Ok(headlines) => {
                info!("Fetched {} live headlines", headlines.len());
                Ok(Sourced::live(headlines))
            }
            Err(e) if e.is_recoverable() => {
                warn!("Using sample headlines: {}", e);
                Ok(Sourced::fallback(sample_headlines()))
            }
            Err(e) => Err(e),
        }
    }

    async fn fetch_live(&self) -> InsightsResult<Vec<Headline>> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| InsightsError::credential_missing("NEWS_API_KEY"))?;

        tokio::time::timeout(self.timeout, provider.fetch_headlines())
            .await
            .map_err(|_| InsightsError::timeout(provider.name(), self.timeout.as_secs()))?
    }
}
