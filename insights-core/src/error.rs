//! Error types for the insights pipeline

use thiserror::Error;

/// Pipeline-wide error type
#[derive(Error, Debug)]
pub enum InsightsError {
    /// No API key configured for the named provider
    #[error("Credential missing: {0}")]
    CredentialMissing(String),

    #[error("Upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    #[error("Upstream timed out after {secs}s: {service}")]
    UpstreamTimeout { service: String, secs: u64 },

    /// Model output that is not a JSON array of insights, or that references
    /// headlines we never sent
    #[error("Malformed model output: {0}")]
    MalformedModelOutput(String),

    #[error("Internal error: {0}")]
    UnexpectedInternal(String),
}

impl InsightsError {
    pub fn credential_missing(msg: impl Into<String>) -> Self {
        InsightsError::CredentialMissing(msg.into())
    }

    pub fn unreachable(msg: impl Into<String>) -> Self {
        InsightsError::UpstreamUnreachable(msg.into())
    }

    pub fn timeout(service: impl Into<String>, secs: u64) -> Self {
        InsightsError::UpstreamTimeout {
            service: service.into(),
            secs,
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        InsightsError::MalformedModelOutput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        InsightsError::UnexpectedInternal(msg.into())
    }

    /// Whether this failure should be answered with sample data instead of
    /// surfacing to the caller
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, InsightsError::UnexpectedInternal(_))
    }
}

/// Result type alias for pipeline operations
pub type InsightsResult<T> = Result<T, InsightsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_internal_errors_propagate() {
        assert!(InsightsError::credential_missing("NEWS_API_KEY").is_recoverable());
        assert!(InsightsError::unreachable("connection refused").is_recoverable());
        assert!(InsightsError::timeout("newsapi", 10).is_recoverable());
        assert!(InsightsError::malformed("expected array").is_recoverable());
        assert!(!InsightsError::internal("boom").is_recoverable());
    }

    #[test]
    fn test_timeout_display() {
        let err = InsightsError::timeout("anthropic", 30);
        assert_eq!(err.to_string(), "Upstream timed out after 30s: anthropic");
    }
}
