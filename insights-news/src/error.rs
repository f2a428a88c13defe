//! Error types for the news module

use insights_core::InsightsError;
use thiserror::Error;

/// Errors that can occur while fetching headlines
#[derive(Debug, Error)]
pub enum NewsError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request did not complete within the configured timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },

    /// Failed to parse API response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<NewsError> for InsightsError {
    fn from(err: NewsError) -> Self {
        match err {
            NewsError::Timeout(secs) => InsightsError::timeout("newsapi", secs),
            NewsError::InvalidConfig(msg) => InsightsError::internal(msg),
            other => InsightsError::unreachable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_errors_map_to_recoverable_kinds() {
        let timeout: InsightsError = NewsError::Timeout(10).into();
        assert!(matches!(timeout, InsightsError::UpstreamTimeout { secs: 10, .. }));

        let api: InsightsError = NewsError::ApiError {
            status: 401,
            message: "apiKeyInvalid".to_string(),
        }
        .into();
        assert!(matches!(api, InsightsError::UpstreamUnreachable(_)));
        assert!(api.is_recoverable());
    }
}
