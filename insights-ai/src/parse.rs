//! Model output parsing and validation

use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

use insights_core::{Headline, InsightsError, InsightsResult, TradingInsight, MAX_INSIGHTS};

/// Extract the JSON payload from a reply that may be fenced or wrapped in prose
pub fn extract_json(content: &str) -> InsightsResult<&str> {
    // Try to find JSON in code blocks first
    if let Some(start) = content.find("```json") {
        let start = start + 7;
        if let Some(end) = content[start..].find("```") {
            return Ok(content[start..start + end].trim());
        }
    }

    // Try plain code blocks
    if let Some(start) = content.find("```") {
        let start = start + 3;
        // Skip language identifier if present
        let start = content[start..]
            .find('\n')
            .map(|n| start + n + 1)
            .unwrap_or(start);
        if let Some(end) = content[start..].find("```") {
            return Ok(content[start..start + end].trim());
        }
    }

    // Raw JSON: the first bracket that opens a complete value; prose on
    // either side (including stray brackets) is ignored
    for (start, _) in content.match_indices(|c: char| c == '[' || c == '{') {
        let rest = &content[start..];
        let mut values = serde_json::Deserializer::from_str(rest).into_iter::<Value>();
        if let Some(Ok(_)) = values.next() {
            return Ok(&rest[..values.byte_offset()]);
        }
    }

    Err(InsightsError::malformed("No JSON found in response"))
}

/// Parse a model reply into at most [`MAX_INSIGHTS`] insights.
///
/// A lone object is accepted as a one-element list. Every insight must point
/// at one of `headlines` by `article_url`.
pub fn parse_insights(content: &str, headlines: &[Headline]) -> InsightsResult<Vec<TradingInsight>> {
    let json = extract_json(content)?;

    let value: Value = serde_json::from_str(json)
        .map_err(|e| InsightsError::malformed(format!("Response is not valid JSON: {}", e)))?;

    let items = match value {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        other => {
            return Err(InsightsError::malformed(format!(
                "Expected a JSON array, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut insights: Vec<TradingInsight> = serde_json::from_value(Value::Array(items))
        .map_err(|e| InsightsError::malformed(format!("Insight does not match schema: {}", e)))?;

    if insights.len() > MAX_INSIGHTS {
        debug!("Truncating {} insights to {}", insights.len(), MAX_INSIGHTS);
        insights.truncate(MAX_INSIGHTS);
    }

    validate_article_urls(&insights, headlines)?;

    Ok(insights)
}

fn validate_article_urls(insights: &[TradingInsight], headlines: &[Headline]) -> InsightsResult<()> {
    let known: HashSet<&str> = headlines.iter().map(|h| h.url.trim()).collect();

    match insights
        .iter()
        .find(|i| !known.contains(i.article_url.trim()))
    {
        Some(unknown) => Err(InsightsError::malformed(format!(
            "Insight references unknown article: {}",
            unknown.article_url
        ))),
        None => Ok(()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insights_core::sample_headlines;

    fn insight_json(url: &str) -> String {
        format!(
            r#"{{"headline":"Apple Reports Record Q4 Earnings, Stock Surges","article_url":"{}","stocks":["AAPL"],"recommendation":"Buy AAPL","rationale":"Beat.","summary":"Apple beat."}}"#,
            url
        )
    }

    #[test]
    fn test_extract_json_from_fence() {
        let content = "Here you go:\n```json\n[1, 2]\n```\nThanks";
        assert_eq!(extract_json(content).unwrap(), "[1, 2]");

        let plain = "```\n[3]\n```";
        assert_eq!(extract_json(plain).unwrap(), "[3]");
    }

    #[test]
    fn test_extract_json_from_prose() {
        let content = "Sure! [{\"a\": 1}] hope that helps";
        assert_eq!(extract_json(content).unwrap(), "[{\"a\": 1}]");
        assert!(extract_json("no json here").is_err());
    }

    #[test]
    fn test_extract_json_skips_bracketed_prose() {
        let content = "Here are my [top] picks:\n[{\"a\": 1}]";
        assert_eq!(extract_json(content).unwrap(), "[{\"a\": 1}]");

        let trailing = "[{\"a\": 1}]\n\nNote: see [1].";
        assert_eq!(extract_json(trailing).unwrap(), "[{\"a\": 1}]");
    }

    #[test]
    fn test_parse_ignores_brackets_in_surrounding_prose() {
        let headlines = sample_headlines();
        let insight = insight_json("https://example.com/apple-earnings");

        let leading = format!("Here are my [top] picks:\n[{}]", insight);
        assert_eq!(parse_insights(&leading, &headlines).unwrap().len(), 1);

        let trailing = format!("[{}]\n\nNote: see [1].", insight);
        assert_eq!(parse_insights(&trailing, &headlines).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_valid_array() {
        let headlines = sample_headlines();
        let content = format!("[{}]", insight_json("https://example.com/apple-earnings"));

        let insights = parse_insights(&content, &headlines).unwrap();
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].stocks, vec!["AAPL".to_string()]);
    }

    #[test]
    fn test_parse_wraps_single_object() {
        let headlines = sample_headlines();
        let content = insight_json("https://example.com/apple-earnings");

        let insights = parse_insights(&content, &headlines).unwrap();
        assert_eq!(insights.len(), 1);
    }

    #[test]
    fn test_parse_truncates_to_max() {
        let headlines = sample_headlines();
        let items: Vec<String> = (0..8)
            .map(|_| insight_json("https://example.com/apple-earnings"))
            .collect();
        let content = format!("```json\n[{}]\n```", items.join(","));

        let insights = parse_insights(&content, &headlines).unwrap();
        assert_eq!(insights.len(), MAX_INSIGHTS);
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let headlines = sample_headlines();
        let content = r#"[{"headline":"h","article_url":"https://example.com/apple-earnings","stocks":[],"recommendation":"Hold","summary":"s"}]"#;

        let err = parse_insights(content, &headlines).unwrap_err();
        assert!(matches!(err, InsightsError::MalformedModelOutput(_)));
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        let headlines = sample_headlines();
        let content = r#"[{"headline":"h","article_url":"https://example.com/apple-earnings","stocks":"AAPL","recommendation":"Buy","rationale":"r","summary":"s"}]"#;

        assert!(parse_insights(content, &headlines).is_err());
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let headlines = sample_headlines();
        let err = parse_insights("I cannot help with that.", &headlines).unwrap_err();
        assert!(matches!(err, InsightsError::MalformedModelOutput(_)));

        assert!(parse_insights("[not, json]", &headlines).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_article() {
        let headlines = sample_headlines();
        let content = format!("[{}]", insight_json("https://elsewhere.com/made-up"));

        let err = parse_insights(&content, &headlines).unwrap_err();
        assert!(err.to_string().contains("unknown article"));
    }

    #[test]
    fn test_parse_accepts_empty_array() {
        let headlines = sample_headlines();
        assert!(parse_insights("[]", &headlines).unwrap().is_empty());
    }
}
