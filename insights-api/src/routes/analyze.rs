//! Analysis endpoints

use axum::{
    extract::State,
    http::{HeaderName, HeaderValue},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use insights_core::{Analysis, InsightCard};

use crate::error::ApiError;
use crate::AppState;

pub const HEADLINE_ORIGIN_HEADER: &str = "x-headline-origin";
pub const INSIGHT_ORIGIN_HEADER: &str = "x-insight-origin";

/// Create analysis routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/analyze/cards", post(analyze_cards))
}

fn origin_headers(analysis: &Analysis) -> [(HeaderName, HeaderValue); 2] {
    [
        (
            HeaderName::from_static(HEADLINE_ORIGIN_HEADER),
            HeaderValue::from_static(analysis.headline_origin.as_str()),
        ),
        (
            HeaderName::from_static(INSIGHT_ORIGIN_HEADER),
            HeaderValue::from_static(analysis.insight_origin.as_str()),
        ),
    ]
}

/// POST /analyze - fetch headlines and return up to five trading insights
async fn analyze(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let analysis = state.pipeline.analyze().await?;
    let headers = origin_headers(&analysis);

    Ok((headers, Json(analysis.insights)))
}

/// POST /analyze/cards - same analysis, shaped as dashboard cards
async fn analyze_cards(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let analysis = state.pipeline.analyze().await?;
    let headers = origin_headers(&analysis);
    let cards: Vec<InsightCard> = analysis.insights.iter().map(InsightCard::from).collect();

    Ok((headers, Json(cards)))
}
