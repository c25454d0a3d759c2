use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use market_mock_core::MarketMock;

use crate::handlers;

/// Create the main application router with all API endpoints
pub fn create_router(market: Arc<MarketMock>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Mock data endpoints
        .route("/api/assets", get(handlers::get_assets))
        .route("/api/prices", get(handlers::get_prices))
        .route("/api/portfolio", get(handlers::get_portfolio))
        // Add shared state
        .with_state(market)
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
