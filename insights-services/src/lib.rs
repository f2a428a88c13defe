//! Service layer for the AI Trading Insights API
//!
//! This crate wires the headline provider and the completion provider into
//! a single analysis pipeline, substituting sample data whenever a provider
//! is unavailable.

pub mod headline_service;
pub mod insight_service;
pub mod pipeline;

pub use headline_service::{HeadlineService, DEFAULT_NEWS_TIMEOUT};
pub use insight_service::{InsightService, DEFAULT_AI_TIMEOUT};
pub use pipeline::AnalysisPipeline;
