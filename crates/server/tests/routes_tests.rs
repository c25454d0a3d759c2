// ═══════════════════════════════════════════════════════════════════
// Route Tests — status codes, error bodies, and JSON shapes, driven
// through the router with oneshot requests
// ═══════════════════════════════════════════════════════════════════

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use tower::ServiceExt;

use market_mock_core::models::asset::Asset;
use market_mock_core::models::position::PositionRecord;
use market_mock_core::models::price::PriceRecord;
use market_mock_core::store::RecordStore;
use market_mock_core::MarketMock;
use market_mock_server::create_router;

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

fn test_app() -> Router {
    let bitcoin = Asset::crypto("Bitcoin");
    let ethereum = Asset::crypto("Ethereum");

    let historical_prices = vec![
        PriceRecord::new("Bitcoin", 16_500, ts(2023, 1, 1, 0, 0, 0)),
        PriceRecord::new("Bitcoin", 17_400, ts(2023, 1, 8, 0, 0, 0)),
        PriceRecord::new("Ethereum", 1_250, ts(2023, 1, 8, 12, 0, 0)),
    ];

    let positions = vec![
        PositionRecord::new(1, bitcoin.id, 5, ts(2024, 6, 14, 0, 0, 0), 65_000),
        PositionRecord::new(2, ethereum.id, 40, ts(2024, 6, 15, 0, 0, 0), 3_400),
    ];

    let store = RecordStore::new(vec![bitcoin, ethereum], historical_prices, positions);
    create_router(Arc::new(MarketMock::from_store(store)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn health_works() {
    let (status, json) = get(test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn assets_returns_the_catalog() {
    let (status, json) = get(test_app(), "/api/assets").await;

    assert_eq!(status, StatusCode::OK);
    let assets = json.as_array().unwrap();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0]["name"], "Bitcoin");
    assert_eq!(assets[0]["type"], "crypto");
}

#[tokio::test]
async fn prices_filters_by_asset() {
    let (status, json) = get(test_app(), "/api/prices?assets=Bitcoin").await;

    assert_eq!(status, StatusCode::OK);
    let quotes = json.as_array().unwrap();
    assert_eq!(quotes.len(), 2);
    assert!(quotes.iter().all(|q| q["asset"] == "Bitcoin"));
}

#[tokio::test]
async fn prices_splits_comma_separated_assets() {
    let (status, json) = get(test_app(), "/api/prices?assets=Bitcoin,Ethereum").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn prices_as_of_reduces_with_placeholders() {
    let (status, json) =
        get(test_app(), "/api/prices?assets=Bitcoin,Ethereum&asOf=2023-01-01").await;

    assert_eq!(status, StatusCode::OK);
    let quotes = json.as_array().unwrap();
    assert_eq!(quotes.len(), 2);
    // Bitcoin has a record on that day; Ethereum gets a zero placeholder
    assert_eq!(quotes[0]["asset"], "Bitcoin");
    assert_eq!(quotes[0]["price"], 16_500);
    assert_eq!(quotes[1]["asset"], "Ethereum");
    assert_eq!(quotes[1]["price"], 0);
    assert!(quotes[1].get("timestamp").is_none());
}

#[tokio::test]
async fn prices_range_filters_by_instant() {
    let (status, json) =
        get(test_app(), "/api/prices?assets=Ethereum&from=2023-01-01&to=2023-01-08").await;

    assert_eq!(status, StatusCode::OK);
    // The Ethereum record sits at 12:00 on the `to` day, past the
    // midnight bound, so outside the range
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn prices_without_assets_is_bad_request() {
    let (status, json) = get(test_app(), "/api/prices").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing required parameter: assets");
}

#[tokio::test]
async fn prices_with_blank_assets_is_bad_request() {
    let (status, _) = get(test_app(), "/api/prices?assets=,,").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn prices_with_invalid_date_is_bad_request() {
    let (status, json) = get(test_app(), "/api/prices?assets=Bitcoin&asOf=not-a-date").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid date: not-a-date");
}

#[tokio::test]
async fn portfolio_filters_by_day() {
    let (status, json) = get(test_app(), "/api/portfolio?asOf=2024-06-15").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["asOf"], "2024-06-15");
    let positions = json["positions"].as_array().unwrap();
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0]["id"], 2);
}

#[tokio::test]
async fn portfolio_without_as_of_returns_everything() {
    let (status, json) = get(test_app(), "/api/portfolio").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["positions"].as_array().unwrap().len(), 2);
    // Stamped with the current instant instead of a requested day
    let as_of = json["asOf"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(as_of).is_ok());
}

#[tokio::test]
async fn portfolio_with_invalid_date_is_bad_request() {
    let (status, json) = get(test_app(), "/api/portfolio?asOf=garbage").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid date: garbage");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = test_app();
    let response = app
        .oneshot(Request::builder().uri("/api/unknown").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
