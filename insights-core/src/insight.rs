//! Trading insight records and the origin tags that travel with them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of insights returned to the client
pub const MAX_INSIGHTS: usize = 5;

/// A structured trade idea derived from a headline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingInsight {
    /// Exact headline title the insight was derived from
    pub headline: String,
    /// URL of the source article
    pub article_url: String,
    /// Ticker-like tokens, e.g. ["AAPL", "MSFT"]
    pub stocks: Vec<String>,
    /// Free-form action such as "Buy AAPL"
    pub recommendation: String,
    pub rationale: String,
    pub summary: String,
}

/// Where a piece of data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Returned by the external provider
    Live,
    /// Substituted from the built-in sample set
    Fallback,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Live => "live",
            Origin::Fallback => "fallback",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Origin::Fallback)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value tagged with its origin
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub data: T,
    pub origin: Origin,
}

impl<T> Sourced<T> {
    pub fn live(data: T) -> Self {
        Self {
            data,
            origin: Origin::Live,
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            data,
            origin: Origin::Fallback,
        }
    }
}

/// Result of one full analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub insights: Vec<TradingInsight>,
    pub headline_origin: Origin,
    pub insight_origin: Origin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_uses_snake_case_fields() {
        let json = r#"{
            "headline": "Apple Reports Record Q4 Earnings",
            "article_url": "https://example.com/apple-earnings",
            "stocks": ["AAPL"],
            "recommendation": "Buy AAPL",
            "rationale": "Earnings beat.",
            "summary": "Apple beat estimates."
        }"#;

        let insight: TradingInsight = serde_json::from_str(json).unwrap();
        assert_eq!(insight.stocks, vec!["AAPL".to_string()]);
        assert_eq!(insight.article_url, "https://example.com/apple-earnings");
    }

    #[test]
    fn test_insight_rejects_missing_rationale() {
        let json = r#"{
            "headline": "h",
            "article_url": "u",
            "stocks": [],
            "recommendation": "Hold",
            "summary": "s"
        }"#;

        assert!(serde_json::from_str::<TradingInsight>(json).is_err());
    }

    #[test]
    fn test_origin_display() {
        assert_eq!(Origin::Live.to_string(), "live");
        assert_eq!(Origin::Fallback.to_string(), "fallback");
        assert!(Sourced::fallback(()).origin.is_fallback());
    }
}
