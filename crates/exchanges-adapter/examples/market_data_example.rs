/*
[INPUT]:  Market identifiers (e.g., "BTC-LTC", "btcusd")
[OUTPUT]: Public market data envelopes from both exchanges
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use exchanges_adapter::*;

/// Example: Query market data (no authentication required)
#[tokio::main]
async fn main() {
    println!("=== Exchange Market Data Example ===\n");

    let bittrex = match BittrexClient::public() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create Bittrex client: {}", e);
            return;
        }
    };
    let bitfinex = match BitfinexClient::public() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create Bitfinex client: {}", e);
            return;
        }
    };

    println!("Querying Bittrex ticker for BTC-LTC...");
    match bittrex.get_ticker("BTC-LTC").await {
        Ok(envelope) if envelope.success => println!("✓ Ticker: {:?}", envelope.results),
        Ok(envelope) => println!("✗ {}", envelope.message),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying Bittrex order book (sell side) for BTC-LTC...");
    match bittrex.get_order_book("BTC-LTC", OrderBookType::Sell).await {
        Ok(envelope) => println!("  success={} message={:?}", envelope.success, envelope.message),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying Bitfinex ticker for btcusd...");
    match bitfinex.get_ticker("btcusd").await {
        Ok(envelope) if envelope.success => println!("✓ Ticker: {:?}", envelope.results),
        Ok(envelope) => println!("✗ {}", envelope.message),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
