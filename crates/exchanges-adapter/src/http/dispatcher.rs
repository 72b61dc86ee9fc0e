/*
[INPUT]:  Signed requests and HTTP configuration (timeouts)
[OUTPUT]: Parsed JSON bodies folded into response envelopes
[POS]:    HTTP layer - single point where transport failures are normalized
[UPDATE]: When changing transport options or the success criteria
*/

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::{ClientConfig, ExchangeError, ResponseEnvelope, Result, SignedRequest};

/// Executes signed requests over HTTP
#[derive(Debug, Clone)]
pub struct Dispatcher {
    http_client: Client,
}

impl Dispatcher {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| ExchangeError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http_client })
    }

    /// Send the request and decode the body as JSON
    ///
    /// The HTTP status is not checked: any JSON body counts as a completed
    /// exchange and is handed back untouched.
    pub async fn send_json(&self, request: SignedRequest) -> Result<Value> {
        let SignedRequest {
            endpoint,
            url,
            method,
            headers,
            body,
        } = request;
        let path = url.path().to_string();

        let mut builder = self.http_client.request(method.as_reqwest(), url);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        debug!(endpoint, %method, path = %path, "sending request");
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            ExchangeError::Communication(format!("invalid JSON body (HTTP {status}): {e}"))
        })?;

        if status.is_success() {
            debug!(endpoint, status = status.as_u16(), "response received");
        } else {
            warn!(endpoint, status = status.as_u16(), "non-success status with JSON body");
        }
        Ok(value)
    }

    /// Send the request; never fails, transport problems become an error envelope
    pub async fn execute(&self, request: SignedRequest) -> ResponseEnvelope {
        let endpoint = request.endpoint;
        self.send_json(request)
            .await
            .inspect_err(|err| warn!(endpoint, error = %err, "request failed"))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::HttpMethod;
    use reqwest::Url;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_bytes, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(url: &str, method: HttpMethod, body: Option<Vec<u8>>) -> SignedRequest {
        SignedRequest {
            endpoint: "test",
            url: Url::parse(url).unwrap(),
            method,
            headers: vec![("apisign".to_string(), "abc".to_string())],
            body,
        }
    }

    #[tokio::test]
    async fn test_execute_wraps_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/symbols"))
            .and(header("apisign", "abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["btcusd", "ethusd"])))
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = Dispatcher::new(&ClientConfig::default()).unwrap();
        let envelope = dispatcher
            .execute(request(&format!("{}/v1/symbols", server.uri()), HttpMethod::Get, None))
            .await;

        assert_eq!(envelope, ResponseEnvelope::ok(json!(["btcusd", "ethusd"])));
    }

    #[tokio::test]
    async fn test_post_sends_exact_body() {
        let server = MockServer::start().await;
        let body = br#"{"nonce":"1","request":"/v1/balances"}"#.to_vec();
        Mock::given(method("POST"))
            .and(path("/v1/balances"))
            .and(body_bytes(body.clone()))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = Dispatcher::new(&ClientConfig::default()).unwrap();
        let envelope = dispatcher
            .execute(request(&format!("{}/v1/balances", server.uri()), HttpMethod::Post, Some(body)))
            .await;

        assert!(envelope.success);
    }

    #[tokio::test]
    async fn test_error_status_with_json_passes_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": "Unknown symbol"})))
            .mount(&server)
            .await;

        let dispatcher = Dispatcher::new(&ClientConfig::default()).unwrap();
        let envelope = dispatcher
            .execute(request(&format!("{}/v1/pubticker/x", server.uri()), HttpMethod::Get, None))
            .await;

        assert_eq!(envelope, ResponseEnvelope::ok(json!({"message": "Unknown symbol"})));
    }

    #[tokio::test]
    async fn test_non_json_body_is_communication_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let dispatcher = Dispatcher::new(&ClientConfig::default()).unwrap();
        let envelope = dispatcher
            .execute(request(&format!("{}/v1/symbols", server.uri()), HttpMethod::Get, None))
            .await;

        assert_eq!(envelope, ResponseEnvelope::communication_error());
    }

    #[tokio::test]
    async fn test_timeout_is_communication_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let config = ClientConfig {
            timeout: Some(Duration::from_millis(50)),
            connect_timeout: None,
        };
        let dispatcher = Dispatcher::new(&config).unwrap();
        let result = dispatcher
            .send_json(request(&format!("{}/slow", server.uri()), HttpMethod::Get, None))
            .await;

        assert!(matches!(result, Err(ExchangeError::Communication(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_communication_error() {
        let dispatcher = Dispatcher::new(&ClientConfig::default()).unwrap();
        let envelope = dispatcher
            .execute(request("http://127.0.0.1:1/v1/symbols", HttpMethod::Get, None))
            .await;

        assert_eq!(envelope, ResponseEnvelope::communication_error());
    }

    #[tokio::test]
    async fn test_transport_error_hides_query_string() {
        let dispatcher = Dispatcher::new(&ClientConfig::default()).unwrap();
        let err = dispatcher
            .send_json(request(
                "http://127.0.0.1:1/v1.1/account/getbalances?apikey=SECRET-KEY-123&nonce=1",
                HttpMethod::Get,
                None,
            ))
            .await
            .unwrap_err();

        assert!(matches!(err, ExchangeError::Communication(_)));
        let text = err.to_string();
        assert!(!text.contains("SECRET-KEY-123"), "{text}");
        assert!(!text.contains("apikey"), "{text}");
    }
}
