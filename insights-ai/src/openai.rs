use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use insights_core::{InsightsError, InsightsResult};
use tracing::instrument;

use crate::provider::{CompletionProvider, CompletionRequest};

pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenAIClient {
    /// Create a client with an explicit key; `base_url` overrides the
    /// default `https://api.openai.com/v1`
    pub fn new(
        api_key: String,
        base_url: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, InsightsError> {
        if api_key.trim().is_empty() {
            return Err(InsightsError::credential_missing("OPENAI_API_KEY"));
        }

        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(base) = base_url {
            config = config.with_api_base(base);
        }

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InsightsError::internal(e.to_string()))?;

        Ok(Self {
            client: Client::with_config(config).with_http_client(http_client),
            model: DEFAULT_MODEL.to_string(),
            timeout,
        })
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    fn request_error(&self, err: OpenAIError) -> InsightsError {
        match err {
            OpenAIError::Reqwest(e) if e.is_timeout() => {
                InsightsError::timeout("openai", self.timeout.as_secs())
            }
            other => InsightsError::unreachable(format!("OpenAI API error: {}", other)),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAIClient {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn complete(&self, request: &CompletionRequest) -> InsightsResult<String> {
        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(request.prompt.as_str())
                .build()
                .map_err(|e| InsightsError::internal(e.to_string()))?
                .into()])
            .temperature(request.temperature)
            .max_tokens(request.max_tokens)
            .build()
            .map_err(|e| InsightsError::internal(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(chat_request)
            .await
            .map_err(|e| self.request_error(e))?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| InsightsError::malformed("No response from OpenAI"))?;

        Ok(content.trim().to_string())
    }
}
