/*
[INPUT]:  Credential configurations and concurrent signing
[OUTPUT]: Test results for credentials checks and nonce ordering
[POS]:    Integration tests - authentication
[UPDATE]: When signing strategies or nonce generation change
*/

mod common;

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use common::{
    UNREACHABLE_URL, bitfinex_client, bittrex_client, setup_mock_server, test_credentials,
};
use exchanges_adapter::{Credentials, ExchangeError, Params};
use rstest::rstest;
use serde_json::{Value, json};
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

fn query_nonce(url: &reqwest::Url) -> u64 {
    url.query_pairs()
        .find(|(key, _)| key == "nonce")
        .and_then(|(_, value)| value.parse().ok())
        .expect("nonce query parameter")
}

fn payload_nonce(payload: &str) -> u64 {
    let body: Value = serde_json::from_slice(&BASE64.decode(payload).unwrap()).unwrap();
    body["nonce"].as_str().unwrap().parse().unwrap()
}

#[rstest]
#[case::no_credentials(Credentials::anonymous())]
#[case::no_secret(Credentials::new(Some("key".into()), None))]
#[case::empty_secret(Credentials::new(Some("key".into()), Some(String::new())))]
#[case::no_key(Credentials::new(None, Some("secret".into())))]
#[tokio::test]
async fn test_private_calls_fail_before_network(#[case] credentials: Credentials) {
    let server = setup_mock_server().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let bittrex = bittrex_client(&server.uri(), credentials.clone());
    let err = bittrex.get_balances().await.unwrap_err();
    assert!(matches!(err, ExchangeError::MissingCredentials { .. }));

    let bitfinex = bitfinex_client(&server.uri(), credentials);
    let err = bitfinex.active_orders().await.unwrap_err();
    assert!(matches!(err, ExchangeError::MissingCredentials { .. }));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_public_calls_need_no_credentials() {
    let server = setup_mock_server().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = bittrex_client(&server.uri(), Credentials::anonymous());
    let envelope = client.get_currencies().await.unwrap();
    assert!(envelope.success);
}

#[test]
fn test_bittrex_nonces_strictly_increase() {
    let client = bittrex_client(UNREACHABLE_URL, test_credentials());

    let nonces: Vec<u64> = (0..50)
        .map(|_| {
            let request = client
                .client()
                .prepare("getbalances", &[], &Params::new())
                .unwrap();
            query_nonce(&request.url)
        })
        .collect();

    assert!(nonces.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_concurrent_bitfinex_nonces_unique() {
    let client = Arc::new(bitfinex_client(UNREACHABLE_URL, test_credentials()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = Arc::clone(&client);
            std::thread::spawn(move || {
                (0..100)
                    .map(|_| {
                        let request = client
                            .client()
                            .prepare("balances", &[], &Params::new())
                            .unwrap();
                        payload_nonce(request.header("X-API-PAYLOAD").unwrap())
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut all = Vec::new();
    for handle in handles {
        let nonces = handle.join().unwrap();
        assert!(nonces.windows(2).all(|pair| pair[0] < pair[1]));
        all.extend(nonces);
    }
    let total = all.len();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), total);
}

#[test]
fn test_reserved_payload_keys_rejected() {
    let client = bitfinex_client(UNREACHABLE_URL, test_credentials());
    let mut params = Params::new();
    params.insert("nonce".to_string(), json!("1"));

    let err = client
        .client()
        .prepare("orders", &[], &params)
        .unwrap_err();
    assert!(matches!(err, ExchangeError::MalformedEndpoint { .. }));
}

#[test]
fn test_clients_sharing_a_key_never_repeat_nonces() {
    let first = bittrex_client(UNREACHABLE_URL, test_credentials());
    let second = bittrex_client(UNREACHABLE_URL, test_credentials());

    let mut all = Vec::new();
    for _ in 0..200 {
        for client in [&first, &second] {
            let request = client
                .client()
                .prepare("getbalances", &[], &Params::new())
                .unwrap();
            all.push(query_nonce(&request.url));
        }
    }

    assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_reserved_query_keys_rejected() {
    let client = bittrex_client(UNREACHABLE_URL, test_credentials());
    let mut params = Params::new();
    params.insert("nonce".to_string(), json!("1"));
    params.insert("apikey".to_string(), json!("other"));

    let err = client
        .client()
        .prepare("getbalances", &[], &params)
        .unwrap_err();
    assert!(matches!(err, ExchangeError::MalformedEndpoint { .. }));
}
