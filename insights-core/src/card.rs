//! Dashboard card view model
//!
//! Shapes a [`TradingInsight`] into what the dashboard draws: upper-cased
//! ticker chips, a buy/sell/hold badge, and an optional quote link for the
//! primary ticker.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::TradingInsight;

/// External quote page; the primary ticker is appended as a path segment
pub const QUOTE_BASE_URL: &str = "https://finance.yahoo.com/quote";

const ACTION_WORDS: [&str; 3] = ["BUY", "SELL", "HOLD"];

/// Badge style for a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationClass {
    Buy,
    Sell,
    Hold,
}

impl RecommendationClass {
    /// Case-insensitive substring match; "buy" wins over "sell", anything
    /// else is a hold
    pub fn classify(recommendation: &str) -> Self {
        let lower = recommendation.to_lowercase();
        if lower.contains("buy") {
            RecommendationClass::Buy
        } else if lower.contains("sell") {
            RecommendationClass::Sell
        } else {
            RecommendationClass::Hold
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationClass::Buy => "buy",
            RecommendationClass::Sell => "sell",
            RecommendationClass::Hold => "hold",
        }
    }
}

/// First ticker with any leading BUY/SELL/HOLD word removed, upper-cased.
///
/// Only the first whitespace-delimited token survives, so "Buy AAPL now"
/// yields `AAPL`. Returns `None` when the list is empty or nothing is left
/// after stripping.
pub fn primary_ticker(stocks: &[String]) -> Option<String> {
    let first = stocks.first()?.trim();
    let upper = first.to_uppercase();

    let stripped = ACTION_WORDS
        .iter()
        .find_map(|word| {
            let rest = upper.strip_prefix(word)?;
            // Only a whole word counts: "BUYX" stays as is
            if rest.starts_with(|c: char| c.is_alphanumeric()) {
                None
            } else {
                Some(rest.trim_start_matches(|c: char| !c.is_alphanumeric()))
            }
        })
        .unwrap_or(upper.as_str());

    let ticker = stripped
        .split_whitespace()
        .next()?
        .trim_matches(|c: char| !is_ticker_char(c));

    if ticker.is_empty() {
        None
    } else {
        Some(ticker.to_string())
    }
}

// Symbols like BRK.B, BF-B, ^GSPC and EURUSD=X
fn is_ticker_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '.' | '-' | '^' | '=')
}

/// Quote page URL for an insight's primary ticker, percent-encoded
pub fn quote_url(stocks: &[String]) -> Option<String> {
    let ticker = primary_ticker(stocks)?;
    let mut url = Url::parse(QUOTE_BASE_URL).ok()?;
    url.path_segments_mut().ok()?.pop_if_empty().push(&ticker);
    Some(url.into())
}

/// One rendered dashboard card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightCard {
    pub headline: String,
    pub article_url: String,
    /// Upper-cased ticker chips
    pub tickers: Vec<String>,
    pub recommendation: String,
    pub recommendation_class: RecommendationClass,
    pub rationale: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_url: Option<String>,
}

impl From<&TradingInsight> for InsightCard {
    fn from(insight: &TradingInsight) -> Self {
        Self {
            headline: insight.headline.clone(),
            article_url: insight.article_url.clone(),
            tickers: insight
                .stocks
                .iter()
                .map(|s| s.trim().to_uppercase())
                .collect(),
            recommendation: insight.recommendation.clone(),
            recommendation_class: RecommendationClass::classify(&insight.recommendation),
            rationale: insight.rationale.clone(),
            summary: insight.summary.clone(),
            quote_url: quote_url(&insight.stocks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stocks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_primary_ticker_strips_action_word() {
        assert_eq!(primary_ticker(&stocks(&["BUY AAPL"])), Some("AAPL".to_string()));
        assert_eq!(primary_ticker(&stocks(&["sell  nvda "])), Some("NVDA".to_string()));
        assert_eq!(primary_ticker(&stocks(&["Hold SPY", "QQQ"])), Some("SPY".to_string()));
    }

    #[test]
    fn test_primary_ticker_uppercases_plain_symbol() {
        assert_eq!(primary_ticker(&stocks(&["tsla"])), Some("TSLA".to_string()));
        assert_eq!(primary_ticker(&stocks(&["BUYX"])), Some("BUYX".to_string()));
    }

    #[test]
    fn test_primary_ticker_none_when_empty() {
        assert_eq!(primary_ticker(&[]), None);
        assert_eq!(primary_ticker(&stocks(&["BUY"])), None);
        assert_eq!(primary_ticker(&stocks(&["  "])), None);
        assert_eq!(quote_url(&[]), None);
    }

    #[test]
    fn test_quote_url() {
        assert_eq!(
            quote_url(&stocks(&["BUY AAPL"])),
            Some("https://finance.yahoo.com/quote/AAPL".to_string())
        );
        assert_eq!(
            quote_url(&stocks(&["åbc"])),
            Some("https://finance.yahoo.com/quote/%C3%85BC".to_string())
        );
    }

    #[test]
    fn test_primary_ticker_keeps_first_token_only() {
        assert_eq!(primary_ticker(&stocks(&["BUY: AAPL"])), Some("AAPL".to_string()));
        assert_eq!(primary_ticker(&stocks(&["Buy AAPL now"])), Some("AAPL".to_string()));
        assert_eq!(primary_ticker(&stocks(&["BRK B"])), Some("BRK".to_string()));
        assert_eq!(primary_ticker(&stocks(&["brk.b"])), Some("BRK.B".to_string()));
        assert_eq!(primary_ticker(&stocks(&["(TSLA)"])), Some("TSLA".to_string()));
    }

    #[test]
    fn test_quote_url_has_no_raw_spaces() {
        for entry in ["BUY: AAPL", "Buy AAPL now", "BRK B", "hold  spy , qqq"] {
            let url = quote_url(&stocks(&[entry])).unwrap();
            assert!(!url.contains(' '), "{}", url);
            assert!(!url.contains(':') || url.starts_with("https:"), "{}", url);
        }
    }

    #[test]
    fn test_classify_recommendation() {
        assert_eq!(RecommendationClass::classify("Strong Buy"), RecommendationClass::Buy);
        assert_eq!(RecommendationClass::classify("SELL immediately"), RecommendationClass::Sell);
        assert_eq!(RecommendationClass::classify("Hold steady"), RecommendationClass::Hold);
        assert_eq!(RecommendationClass::classify("Neutral"), RecommendationClass::Hold);
    }

    #[test]
    fn test_card_from_insight() {
        let insight = TradingInsight {
            headline: "Tesla deliveries miss".to_string(),
            article_url: "https://example.com/tsla".to_string(),
            stocks: stocks(&["tsla", "rivn"]),
            recommendation: "Sell TSLA".to_string(),
            rationale: "Weak demand.".to_string(),
            summary: "Deliveries fell short.".to_string(),
        };

        let card = InsightCard::from(&insight);
        assert_eq!(card.tickers, stocks(&["TSLA", "RIVN"]));
        assert_eq!(card.recommendation_class, RecommendationClass::Sell);
        assert_eq!(
            card.quote_url.as_deref(),
            Some("https://finance.yahoo.com/quote/TSLA")
        );
    }
}
