//! Headline provider abstraction

use async_trait::async_trait;
use insights_core::{Headline, InsightsResult};

/// Something that can supply recent finance headlines, most recent first
#[async_trait]
pub trait HeadlineProvider: Send + Sync {
    /// Short provider name used in logs
    fn name(&self) -> &str;

    async fn fetch_headlines(&self) -> InsightsResult<Vec<Headline>>;
}
