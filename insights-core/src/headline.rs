//! Headline data structures fed to the insight generator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single finance news item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Headline {
    /// Article title
    pub title: String,
    /// Article URL
    pub url: String,
    /// Publication date
    pub published_at: DateTime<Utc>,
    /// Brief description/excerpt from the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Name of the publishing outlet (e.g., "Reuters")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Headline {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            published_at,
            description: None,
            source: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
