//! LLM analysis for the trading insights pipeline
//!
//! This crate turns a headline list into a single prompt, sends it to a
//! text-generation provider (Anthropic or OpenAI), and parses the reply into
//! validated trading insights.

pub mod anthropic;
pub mod openai;
pub mod parse;
pub mod prompt;
pub mod provider;

pub use anthropic::AnthropicClient;
pub use openai::OpenAIClient;
pub use parse::{extract_json, parse_insights};
pub use prompt::build_insight_prompt;
pub use provider::{CompletionProvider, CompletionRequest, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
