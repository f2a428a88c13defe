//! Process configuration, loaded once at startup

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Which text-generation backend to call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiProvider {
    Anthropic,
    OpenAI,
}

impl AiProvider {
    /// Environment variable holding this provider's key
    pub fn key_var(&self) -> &'static str {
        match self {
            AiProvider::Anthropic => "ANTHROPIC_API_KEY",
            AiProvider::OpenAI => "OPENAI_API_KEY",
        }
    }
}

impl FromStr for AiProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "anthropic" | "claude" => Ok(AiProvider::Anthropic),
            "openai" => Ok(AiProvider::OpenAI),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiProvider::Anthropic => f.write_str("anthropic"),
            AiProvider::OpenAI => f.write_str("openai"),
        }
    }
}

/// News provider settings
#[derive(Debug, Clone)]
pub struct NewsConfig {
    /// `None` activates the sample-headline fallback
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

/// Text-generation provider settings
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub provider: AiProvider,
    /// `None` activates the sample-insight fallback
    pub api_key: Option<String>,
    /// Overrides the provider's default endpoint
    pub base_url: Option<String>,
    /// Overrides the provider's default model
    pub model: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub news: NewsConfig,
    pub ai: AiConfig,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// Reads:
    /// - NEWS_API_KEY, NEWS_API_URL, NEWS_TIMEOUT_SECS
    /// - AI_PROVIDER, ANTHROPIC_API_KEY / OPENAI_API_KEY, AI_BASE_URL, AI_MODEL, AI_TIMEOUT_SECS
    /// - SERVER_PORT
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let provider = match get("AI_PROVIDER") {
            Some(value) => value.parse()?,
            None => AiProvider::Anthropic,
        };

        let news = NewsConfig {
            api_key: get("NEWS_API_KEY"),
            base_url: get("NEWS_API_URL").unwrap_or_else(|| insights_news::DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(parse_or(&get, "NEWS_TIMEOUT_SECS", 10)?),
        };

        let ai = AiConfig {
            provider,
            api_key: get(provider.key_var()),
            base_url: get("AI_BASE_URL"),
            model: get("AI_MODEL"),
            timeout: Duration::from_secs(parse_or(&get, "AI_TIMEOUT_SECS", 30)?),
        };

        Ok(Self {
            news,
            ai,
            port: parse_or(&get, "SERVER_PORT", 8000)?,
        })
    }
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber {
            var: key.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown AI_PROVIDER '{0}' (expected 'anthropic' or 'openai')")]
    UnknownProvider(String),

    #[error("Invalid number in {var}: '{value}'")]
    InvalidNumber { var: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_any_variables() {
        let config = config(&[]).unwrap();
        assert_eq!(config.news.api_key, None);
        assert_eq!(config.news.base_url, "https://newsapi.org");
        assert_eq!(config.news.timeout, Duration::from_secs(10));
        assert_eq!(config.ai.provider, AiProvider::Anthropic);
        assert_eq!(config.ai.api_key, None);
        assert_eq!(config.ai.timeout, Duration::from_secs(30));
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_empty_keys_count_as_absent() {
        let config = config(&[("NEWS_API_KEY", ""), ("ANTHROPIC_API_KEY", "   ")]).unwrap();
        assert_eq!(config.news.api_key, None);
        assert_eq!(config.ai.api_key, None);
    }

    #[test]
    fn test_provider_selects_key_variable() {
        let config = config(&[
            ("AI_PROVIDER", "OpenAI"),
            ("ANTHROPIC_API_KEY", "sk-ant"),
            ("OPENAI_API_KEY", "sk-oai"),
            ("AI_MODEL", "gpt-4o-mini"),
        ])
        .unwrap();
        assert_eq!(config.ai.provider, AiProvider::OpenAI);
        assert_eq!(config.ai.api_key.as_deref(), Some("sk-oai"));
        assert_eq!(config.ai.model.as_deref(), Some("gpt-4o-mini"));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(matches!(
            config(&[("AI_PROVIDER", "llama")]),
            Err(ConfigError::UnknownProvider(_))
        ));
        assert!(matches!(
            config(&[("SERVER_PORT", "eighty")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            config(&[("AI_TIMEOUT_SECS", "-1")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
    }
}
