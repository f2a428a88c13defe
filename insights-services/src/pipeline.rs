//! Analysis pipeline: headlines in, insights out

use tracing::{info, instrument};

use insights_core::{Analysis, InsightsResult};

use crate::{HeadlineService, InsightService};

/// Runs the headline fetch and the insight generation back to back
#[derive(Clone)]
pub struct AnalysisPipeline {
    headlines: HeadlineService,
    insights: InsightService,
}

impl AnalysisPipeline {
    pub fn new(headlines: HeadlineService, insights: InsightService) -> Self {
        Self {
            headlines,
            insights,
        }
    }

    /// Pipeline that never leaves the process
    pub fn sample_only() -> Self {
        Self::new(HeadlineService::sample_only(), InsightService::sample_only())
    }

    /// One full analysis run
    #[instrument(skip(self))]
    pub async fn analyze(&self) -> InsightsResult<Analysis> {
        let headlines = self.headlines.fetch_headlines().await?;
        let insights = self.insights.generate_insights(&headlines.data).await?;

        info!(
            "Analysis complete: {} insights (headlines: {}, insights: {})",
            insights.data.len(),
            headlines.origin,
            insights.origin
        );

        Ok(Analysis {
            insights: insights.data,
            headline_origin: headlines.origin,
            insight_origin: insights.origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use insights_ai::{CompletionProvider, CompletionRequest};
    use insights_core::{sample_insights, Origin, MAX_INSIGHTS};

    /// Echoes the first two URLs it finds in the prompt back as insights
    struct EchoProvider;

    #[async_trait]
    impl CompletionProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        fn model(&self) -> &str {
            "echo-1"
        }

        async fn complete(&self, request: &CompletionRequest) -> InsightsResult<String> {
            let urls: Vec<&str> = request
                .prompt
                .lines()
                .filter_map(|line| line.trim().strip_prefix("\"url\": \""))
                .map(|rest| rest.trim_end_matches(',').trim_end_matches('"'))
                .take(2)
                .collect();

            let items: Vec<serde_json::Value> = urls
                .iter()
                .map(|url| {
                    serde_json::json!({
                        "headline": "echo",
                        "article_url": url,
                        "stocks": ["SPY"],
                        "recommendation": "Hold SPY",
                        "rationale": "r",
                        "summary": "s"
                    })
                })
                .collect();

            Ok(serde_json::to_string(&items).unwrap_or_default())
        }
    }

    #[tokio::test]
    async fn test_without_credentials_returns_samples_deterministically() {
        let pipeline = AnalysisPipeline::sample_only();

        let first = pipeline.analyze().await.unwrap();
        let second = pipeline.analyze().await.unwrap();

        assert_eq!(first.headline_origin, Origin::Fallback);
        assert_eq!(first.insight_origin, Origin::Fallback);
        assert_eq!(first.insights, sample_insights());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_live_model_over_sample_headlines() {
        let insights = InsightService::new(Some(Arc::new(EchoProvider)), Duration::from_secs(5));
        let pipeline = AnalysisPipeline::new(HeadlineService::sample_only(), insights);

        let analysis = pipeline.analyze().await.unwrap();

        assert_eq!(analysis.headline_origin, Origin::Fallback);
        assert_eq!(analysis.insight_origin, Origin::Live);
        assert_eq!(analysis.insights.len(), 2);
        assert!(analysis.insights.len() <= MAX_INSIGHTS);
        assert_eq!(analysis.insights[0].article_url, "https://example.com/apple-earnings");
    }
}
