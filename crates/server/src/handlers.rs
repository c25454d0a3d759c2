use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use market_mock_core::{models::query::PriceQuery, MarketMock};

use crate::Result;

pub type MarketState = Arc<MarketMock>;

/// Query-string parameters of GET /api/prices.
#[derive(Debug, Deserialize)]
pub struct PricesParams {
    /// Comma-separated asset names
    pub assets: Option<String>,
    #[serde(rename = "asOf")]
    pub as_of: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Query-string parameters of GET /api/portfolio.
#[derive(Debug, Deserialize)]
pub struct PortfolioParams {
    #[serde(rename = "asOf")]
    pub as_of: Option<String>,
}

/// GET /api/assets
/// Returns the fixed asset catalog.
pub async fn get_assets(State(market): State<MarketState>) -> impl IntoResponse {
    Json(market.assets().to_vec())
}

/// GET /api/prices?assets=Bitcoin,Ethereum&asOf=2024-06-15
/// Filters the historical prices; an asOf query reduces to one latest
/// record per requested asset.
pub async fn get_prices(
    State(market): State<MarketState>,
    Query(params): Query<PricesParams>,
) -> Result<impl IntoResponse> {
    let query = PriceQuery {
        assets: split_csv(params.assets.as_deref()),
        as_of: params.as_of,
        from: params.from,
        to: params.to,
    };

    let quotes = market.query_prices(&query)?;
    Ok(Json(quotes))
}

/// GET /api/portfolio?asOf=2024-06-15
/// Returns a snapshot of the position records, optionally narrowed to one
/// calendar day.
pub async fn get_portfolio(
    State(market): State<MarketState>,
    Query(params): Query<PortfolioParams>,
) -> Result<impl IntoResponse> {
    let snapshot = market.query_portfolio(params.as_of.as_deref())?;
    Ok(Json(snapshot))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "market-mock-api"
    }))
}

/// Split the comma-separated asset parameter into trimmed, non-empty
/// names. The core treats an empty list as a missing parameter.
fn split_csv(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    })
    .unwrap_or_default()
}
