//! Anthropic Messages API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use insights_core::{InsightsError, InsightsResult};

use crate::provider::{CompletionProvider, CompletionRequest};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const API_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

/// Anthropic client
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    endpoint: Url,
    model: String,
    timeout: Duration,
}

impl AnthropicClient {
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> InsightsResult<Self> {
        if api_key.trim().is_empty() {
            return Err(InsightsError::credential_missing("ANTHROPIC_API_KEY"));
        }

        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join("/v1/messages"))
            .map_err(|e| InsightsError::internal(format!("Bad Anthropic URL {}: {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InsightsError::internal(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            endpoint,
            model: DEFAULT_MODEL.to_string(),
            timeout,
        })
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    fn request_error(&self, err: reqwest::Error) -> InsightsError {
        if err.is_timeout() {
            InsightsError::timeout("anthropic", self.timeout.as_secs())
        } else {
            InsightsError::unreachable(format!("Anthropic request failed: {}", err))
        }
    }
}

#[async_trait]
impl CompletionProvider for AnthropicClient {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn complete(&self, request: &CompletionRequest) -> InsightsResult<String> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            messages: [Message {
                role: "user",
                content: &request.prompt,
            }],
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InsightsError::unreachable(format!(
                "Anthropic API error {}: {}",
                status, body
            )));
        }

        let parsed: MessagesResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                InsightsError::timeout("anthropic", self.timeout.as_secs())
            } else {
                InsightsError::unreachable(format!("Undecodable Anthropic response: {}", e))
            }
        })?;

        debug!(
            "Anthropic returned {} content block(s), stop_reason={:?}",
            parsed.content.len(),
            parsed.stop_reason
        );

        let text = parsed
            .content
            .iter()
            .filter(|block| block.block_type == "text")
            .filter_map(|block| block.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n");

        if text.trim().is_empty() {
            return Err(InsightsError::malformed("No text in Anthropic response"));
        }

        Ok(text.trim().to_string())
    }
}
