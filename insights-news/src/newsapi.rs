//! NewsAPI client for finance headlines

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use insights_core::{Headline, InsightsResult};

use crate::error::NewsError;
use crate::provider::HeadlineProvider;
use crate::types::{NewsApiArticle, NewsApiErrorBody, NewsApiResponse};

/// Default NewsAPI host
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";

/// Fixed search query for business/finance coverage
const FINANCE_QUERY: &str = "business OR finance OR stocks";

/// Maximum headlines requested and returned
pub const MAX_HEADLINES: usize = 15;

/// Placeholder title NewsAPI uses for taken-down articles
const REMOVED_TITLE: &str = "[Removed]";

/// NewsAPI client
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    endpoint: Url,
    timeout: Duration,
}

impl NewsApiClient {
    /// Create a new NewsAPI client against `base_url` (e.g. [`DEFAULT_BASE_URL`])
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> Result<Self, NewsError> {
        if api_key.trim().is_empty() {
            return Err(NewsError::InvalidConfig("NewsAPI key is empty".to_string()));
        }

        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join("/v2/everything"))
            .map_err(|e| NewsError::InvalidConfig(format!("Bad NewsAPI URL {}: {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NewsError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            endpoint,
            timeout,
        })
    }

    /// Fetch the latest finance headlines, newest first
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn latest_headlines(&self) -> Result<Vec<Headline>, NewsError> {
        let page_size = MAX_HEADLINES.to_string();

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("q", FINANCE_QUERY),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
                ("language", "en"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<NewsApiErrorBody>(&body)
                .ok()
                .and_then(|b| match (b.code, b.message) {
                    (Some(code), Some(msg)) => Some(format!("{}: {}", code, msg)),
                    (None, Some(msg)) => Some(msg),
                    (Some(code), None) => Some(code),
                    (None, None) => None,
                })
                .unwrap_or(body);
            return Err(NewsError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let news_response: NewsApiResponse = response
            .json()
            .await
            .map_err(|e| NewsError::ParseError(e.to_string()))?;

        if news_response.status != "ok" {
            return Err(NewsError::ParseError(format!(
                "Unexpected NewsAPI status '{}'",
                news_response.status
            )));
        }

        info!(
            "Received {} articles from NewsAPI (total available: {:?})",
            news_response.articles.len(),
            news_response.total_results
        );

        let mut headlines: Vec<Headline> = news_response
            .articles
            .into_iter()
            .filter_map(convert_article)
            .collect();

        headlines.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        headlines.truncate(MAX_HEADLINES);

        Ok(headlines)
    }

    fn request_error(&self, err: reqwest::Error) -> NewsError {
        if err.is_timeout() {
            NewsError::Timeout(self.timeout.as_secs())
        } else {
            NewsError::RequestFailed(err.to_string())
        }
    }
}

#[async_trait]
impl HeadlineProvider for NewsApiClient {
    fn name(&self) -> &str {
        "newsapi"
    }

    async fn fetch_headlines(&self) -> InsightsResult<Vec<Headline>> {
        Ok(self.latest_headlines().await?)
    }
}

/// Convert a NewsAPI article, dropping anything without a usable title or URL
fn convert_article(article: NewsApiArticle) -> Option<Headline> {
    let title = article.title.map(|t| t.trim().to_string()).unwrap_or_default();
    let url = article.url.map(|u| u.trim().to_string()).unwrap_or_default();

    if title.is_empty() || url.is_empty() || title == REMOVED_TITLE {
        debug!("Skipping article without usable title/url: '{}'", title);
        return None;
    }

    // Undated articles can't be placed in most-recent-first order
    let Some(published_at) = article
        .published_at
        .as_deref()
        .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
        .map(|d| d.with_timezone(&Utc))
    else {
        debug!("Skipping article with unparseable publishedAt: '{}'", title);
        return None;
    };

    let mut headline = Headline::new(title, url, published_at);
    headline.description = article.description.filter(|d| !d.trim().is_empty());
    headline.source = article.source.and_then(|s| s.name);

    Some(headline)
}
