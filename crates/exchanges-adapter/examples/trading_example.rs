/*
[INPUT]:  API key/secret from environment and order parameters
[OUTPUT]: Signed order requests and account envelopes
[POS]:    Examples - authenticated operations
[UPDATE]: When trading API changes
*/

use exchanges_adapter::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: Authenticated operations
///
/// Reads `BITFINEX_API_KEY` / `BITFINEX_API_SECRET`. Without them the private
/// call fails before anything is sent.
#[tokio::main]
async fn main() {
    println!("=== Bitfinex Trading Example ===\n");

    let credentials = Credentials::new(
        std::env::var("BITFINEX_API_KEY").ok(),
        std::env::var("BITFINEX_API_SECRET").ok(),
    );
    let client = match BitfinexClient::new(credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    println!("\nQuerying balances...");
    match client.balances().await {
        Ok(envelope) => println!("  success={} results={:?}", envelope.success, envelope.results),
        Err(e) => println!("✗ Pre-flight error: {}", e),
    }

    let order = NewOrderRequest::new(
        "btcusd",
        Decimal::from_str("0.001").unwrap_or_default(),
        Decimal::from_str("10000").unwrap_or_default(),
        Side::Buy,
        OrderType::ExchangeLimit,
    );
    println!("\nSigned request for {:?}:", order);
    let params = match to_params(&order) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("✗ {}", e);
            return;
        }
    };
    match client.client().prepare("order/new", &[], &params) {
        Ok(request) => {
            println!("  {} {}", request.method, request.url);
            for (name, _) in &request.headers {
                println!("  header {}", name);
            }
        }
        Err(e) => println!("✗ Pre-flight error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
