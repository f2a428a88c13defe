//! Instruction template for headline analysis

use chrono::{DateTime, Utc};
use serde::Serialize;

use insights_core::{Headline, InsightsError, InsightsResult, MAX_INSIGHTS};

/// Headline fields forwarded to the model
#[derive(Debug, Serialize)]
struct PromptHeadline<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    url: &'a str,
    published_at: DateTime<Utc>,
}

/// Build the single user prompt asking for a JSON array of insights
pub fn build_insight_prompt(headlines: &[Headline]) -> InsightsResult<String> {
    let input: Vec<PromptHeadline<'_>> = headlines
        .iter()
        .map(|h| PromptHeadline {
            title: &h.title,
            description: h.description.as_deref(),
            url: &h.url,
            published_at: h.published_at,
        })
        .collect();

    let headlines_json = serde_json::to_string_pretty(&input)
        .map_err(|e| InsightsError::internal(format!("Failed to serialize headlines: {}", e)))?;

    Ok(format!(
        r#"You are a financial analyst. Review the recent business and finance headlines below and look for trade ideas on US-listed stocks or index funds (for example AAPL or SPY). Only keep actionable opportunities and skip neutral or irrelevant stories.

Headlines:
{headlines_json}

Respond with ONLY a JSON array of at most {max} objects, each shaped exactly like:
{{
  "headline": "the headline title, copied exactly",
  "article_url": "the headline url, copied exactly",
  "stocks": ["TICKER1", "TICKER2"],
  "recommendation": "Buy/Sell/Hold TICKER",
  "rationale": "1-2 sentences on why",
  "summary": "2-3 sentence neutral summary of the article"
}}

Use standard ticker symbols. Be realistic rather than speculative. Output the JSON array and nothing else."#,
        headlines_json = headlines_json,
        max = MAX_INSIGHTS,
    ))
}
