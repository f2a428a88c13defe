//! Headline clients for the trading insights pipeline
//!
//! This crate provides:
//! - NewsAPI: recency-sorted business/finance headlines
//! - `HeadlineProvider`: the seam the service layer fetches through

pub mod error;
pub mod newsapi;
pub mod provider;
pub mod types;

pub use error::NewsError;
pub use newsapi::{NewsApiClient, DEFAULT_BASE_URL, MAX_HEADLINES};
pub use provider::HeadlineProvider;
