//! Core types for the AI Trading Insights service
//!
//! This crate defines the shared data structures used across the workspace:
//! headlines, trading insights, origin tags, the dashboard card view model,
//! and the built-in sample data.

pub mod card;
pub mod error;
pub mod headline;
pub mod insight;
pub mod sample;

pub use card::{primary_ticker, quote_url, InsightCard, RecommendationClass};
pub use error::{InsightsError, InsightsResult};
pub use headline::Headline;
pub use insight::{Analysis, Origin, Sourced, TradingInsight, MAX_INSIGHTS};
pub use sample::{sample_headlines, sample_insights};
