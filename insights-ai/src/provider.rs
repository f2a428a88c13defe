//! Text-generation provider abstraction

use async_trait::async_trait;
use insights_core::InsightsResult;

/// Sampling used for insight generation; low temperature keeps output
/// repeatable and terse
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// A single-turn completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// The only user message; no system prompt or history
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// A text-generation backend that answers one prompt with one reply
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short provider name used in logs and errors
    fn name(&self) -> &str;

    /// Model identifier sent upstream
    fn model(&self) -> &str;

    async fn complete(&self, request: &CompletionRequest) -> InsightsResult<String>;
}
