/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for exchanges-adapter tests

use exchanges_adapter::{BitfinexClient, BittrexClient, ClientConfig, Credentials};
use wiremock::MockServer;

/// Address nothing listens on
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Fixed key/secret pair
pub fn test_credentials() -> Credentials {
    Credentials::new(Some("test-key".to_string()), Some("test-secret".to_string()))
}

#[allow(dead_code)]
pub fn bittrex_client(base_url: &str, credentials: Credentials) -> BittrexClient {
    BittrexClient::with_config_and_base_url(credentials, ClientConfig::default(), base_url)
        .expect("bittrex client init")
}

#[allow(dead_code)]
pub fn bitfinex_client(base_url: &str, credentials: Credentials) -> BitfinexClient {
    BitfinexClient::with_config_and_base_url(credentials, ClientConfig::default(), base_url)
        .expect("bitfinex client init")
}
