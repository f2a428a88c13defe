//! NewsAPI wire types

use serde::Deserialize;

/// Response body of `GET /v2/everything`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiResponse {
    /// "ok" or "error"
    pub status: String,
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Vec<NewsApiArticle>,
}

/// A single article as returned by NewsAPI
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiArticle {
    #[serde(default)]
    pub source: Option<NewsApiSource>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// ISO 8601 timestamp
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewsApiSource {
    #[serde(default)]
    pub name: Option<String>,
}

/// Error body NewsAPI sends with non-2xx responses
#[derive(Debug, Deserialize)]
pub struct NewsApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
