use market_mock_core::MarketMock;
use market_mock_server::run_server;
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment configuration (with sane defaults)
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);
    let seed: u64 = env::var("SEED")
        .unwrap_or_else(|_| "0".to_string())
        .parse()
        .unwrap_or(0);

    // Generate the startup data set once; everything after this is read-only.
    let market = Arc::new(MarketMock::generate(seed));

    println!("Market Mock API Server");
    println!("======================");
    println!("Seed: {seed}");
    println!("Assets: {}", market.assets().len());
    println!("Price records: {}", market.store().historical_prices.len());
    println!("Position records: {}", market.store().positions.len());
    println!("Listening on: {host}:{port}");
    println!();

    run_server(market, &host, port).await?;

    Ok(())
}
