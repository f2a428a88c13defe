//! Built-in sample data served when a provider is unavailable

use chrono::{DateTime, TimeZone, Utc};

use crate::{Headline, TradingInsight};

const APPLE_EARNINGS_URL: &str = "https://example.com/apple-earnings";
const FED_RATES_URL: &str = "https://example.com/fed-rates";
const NVIDIA_GUIDANCE_URL: &str = "https://example.com/nvidia-guidance";

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Fixed headline list, most recent first
pub fn sample_headlines() -> Vec<Headline> {
    vec![
        Headline::new(
            "Apple Reports Record Q4 Earnings, Stock Surges",
            APPLE_EARNINGS_URL,
            at(1, 21, 5),
        )
        .with_description(
            "Apple Inc. announced record-breaking quarterly earnings, beating analyst expectations by 15%.",
        )
        .with_source("Example Wire"),
        Headline::new(
            "Federal Reserve Hints at Rate Cuts in 2024",
            FED_RATES_URL,
            at(1, 19, 40),
        )
        .with_description(
            "The Fed signals potential interest rate reductions, sparking market optimism.",
        )
        .with_source("Example Wire"),
        Headline::new(
            "Nvidia Raises Data Center Revenue Guidance",
            NVIDIA_GUIDANCE_URL,
            at(1, 18, 15),
        )
        .with_description("Nvidia lifted its full-year outlook on sustained AI chip demand.")
        .with_source("Example Markets"),
        Headline::new(
            "Oil Prices Slip as OPEC+ Weighs Output Increase",
            "https://example.com/opec-output",
            at(1, 16, 50),
        )
        .with_description("Crude futures fell after reports OPEC+ may restore paused supply.")
        .with_source("Example Energy"),
        Headline::new(
            "Tesla Deliveries Fall Short of Analyst Estimates",
            "https://example.com/tesla-deliveries",
            at(1, 15, 30),
        )
        .with_description("Quarterly vehicle deliveries missed consensus by roughly 4%.")
        .with_source("Example Autos"),
        Headline::new(
            "Treasury Yields Climb Ahead of Jobs Report",
            "https://example.com/treasury-yields",
            at(1, 14, 10),
        )
        .with_description("The 10-year yield rose to its highest level in three months.")
        .with_source("Example Wire"),
        Headline::new(
            "Microsoft Cloud Growth Accelerates in Latest Quarter",
            "https://example.com/microsoft-cloud",
            at(1, 12, 45),
        )
        .with_description("Azure revenue growth beat expectations on enterprise AI adoption.")
        .with_source("Example Tech"),
        Headline::new(
            "Regional Bank Shares Drop on Deposit Outflow Concerns",
            "https://example.com/regional-banks",
            at(1, 11, 20),
        )
        .with_description("Several mid-sized lenders reported larger-than-expected deposit declines.")
        .with_source("Example Finance"),
        Headline::new(
            "Amazon Announces Expansion of Same-Day Delivery Network",
            "https://example.com/amazon-delivery",
            at(1, 9, 55),
        )
        .with_description("The retailer plans dozens of new fulfillment sites next year.")
        .with_source("Example Retail"),
        Headline::new(
            "Gold Hits Record High as Dollar Weakens",
            "https://example.com/gold-record",
            at(1, 8, 30),
        )
        .with_description("Spot gold rose past its previous peak amid rate-cut bets.")
        .with_source("Example Commodities"),
        Headline::new(
            "Boeing Secures Large Order From Gulf Carrier",
            "https://example.com/boeing-order",
            at(1, 7, 5),
        )
        .with_description("The deal covers dozens of widebody jets over the next decade.")
        .with_source("Example Industrials"),
        Headline::new(
            "Retail Sales Rise More Than Expected in October",
            "https://example.com/retail-sales",
            at(1, 6, 0),
        )
        .with_description("Consumer spending held up despite elevated borrowing costs.")
        .with_source("Example Economy"),
    ]
}

/// Fixed insight list; every `article_url` belongs to [`sample_headlines`]
pub fn sample_insights() -> Vec<TradingInsight> {
    vec![
        TradingInsight {
            headline: "Apple Reports Record Q4 Earnings, Stock Surges".to_string(),
            article_url: APPLE_EARNINGS_URL.to_string(),
            stocks: vec!["AAPL".to_string()],
            recommendation: "Buy AAPL".to_string(),
            rationale: "Strong earnings beat suggests continued growth momentum and potential upside."
                .to_string(),
            summary: "Apple Inc. announced record-breaking quarterly earnings, beating analyst expectations by 15%. The company's iPhone sales and services revenue both exceeded forecasts."
                .to_string(),
        },
        TradingInsight {
            headline: "Federal Reserve Hints at Rate Cuts in 2024".to_string(),
            article_url: FED_RATES_URL.to_string(),
            stocks: vec!["SPY".to_string()],
            recommendation: "Hold SPY".to_string(),
            rationale: "Rate-cut hopes are largely priced in; wait for confirmation from upcoming data."
                .to_string(),
            summary: "The Federal Reserve signalled it may lower interest rates next year. Markets rallied on the comments while officials stressed decisions remain data dependent."
                .to_string(),
        },
        TradingInsight {
            headline: "Nvidia Raises Data Center Revenue Guidance".to_string(),
            article_url: NVIDIA_GUIDANCE_URL.to_string(),
            stocks: vec!["NVDA".to_string()],
            recommendation: "Buy NVDA".to_string(),
            rationale: "Raised guidance points to durable AI demand beyond current estimates."
                .to_string(),
            summary: "Nvidia increased its full-year data center outlook. Management cited sustained orders from cloud providers for its latest accelerators."
                .to_string(),
        },
    ]
}
