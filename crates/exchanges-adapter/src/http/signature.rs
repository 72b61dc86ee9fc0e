/*
[INPUT]:  Resolved endpoints, credentials, and caller parameters
[OUTPUT]: Signed requests (URL, method, headers, body)
[POS]:    HTTP layer - per-exchange request signing strategies
[UPDATE]: When changing signing algorithm or header format
*/

use std::collections::BTreeMap;
use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::Url;
use serde_json::Value;

use crate::auth::{Credentials, HmacSigner, NonceSource};
use crate::catalog::{Catalog, HttpMethod, ResolvedEndpoint, append_query};
use crate::http::{ExchangeError, Result};

/// Caller-supplied request parameters
pub type Params = serde_json::Map<String, Value>;

/// Header carrying the query-signature digest
pub const APISIGN_HEADER: &str = "apisign";

/// Query parameters appended to every query-signed URL
const RESERVED_QUERY_KEYS: [&str; 2] = ["apikey", "nonce"];

/// Fields injected into every payload-signed body
const RESERVED_BODY_KEYS: [&str; 2] = ["request", "nonce"];

/// Fully built request, consumed once by the dispatcher
#[derive(Debug, Clone, PartialEq)]
pub struct SignedRequest {
    pub endpoint: &'static str,
    pub url: Url,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl SignedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Turns a resolved endpoint into a request the exchange will accept
pub trait RequestSigner: Send + Sync + std::fmt::Debug {
    fn sign(
        &self,
        endpoint: &ResolvedEndpoint,
        credentials: &Credentials,
        params: &Params,
    ) -> Result<SignedRequest>;
}

/// Signs the full request URL (HMAC-SHA512, `apisign` header)
#[derive(Debug)]
pub struct QuerySigner {
    api_url: Url,
    nonce: Arc<NonceSource>,
}

impl QuerySigner {
    pub fn new(catalog: &Catalog, nonce: Arc<NonceSource>) -> Result<Self> {
        Ok(Self {
            api_url: catalog.api_url()?,
            nonce,
        })
    }

    /// Sign with an explicit nonce
    pub fn sign_with_nonce(
        &self,
        endpoint: &ResolvedEndpoint,
        credentials: &Credentials,
        params: &Params,
        nonce: u64,
    ) -> Result<SignedRequest> {
        if endpoint.is_private() {
            reject_reserved(endpoint.name, params, &RESERVED_QUERY_KEYS, "signed query")?;
        }

        let mut url = format!("{}{}", self.api_url, endpoint.path);
        append_query(&mut url, params.iter().map(|(key, value)| (key, param_text(value))));

        let mut headers = Vec::new();
        let url = if endpoint.is_private() {
            let (key, secret) = credentials.require(endpoint.name)?;
            let nonce = nonce.to_string();
            append_query(&mut url, [("apikey", key), ("nonce", nonce.as_str())]);

            // sign the exact serialization that goes on the wire
            let url = Url::parse(&url)?;
            let signature = HmacSigner::new(secret).sha512_hex(url.as_str().as_bytes())?;
            headers.push((APISIGN_HEADER.to_string(), signature));
            url
        } else {
            Url::parse(&url)?
        };

        Ok(SignedRequest {
            endpoint: endpoint.name,
            url,
            method: HttpMethod::Get,
            headers,
            body: None,
        })
    }
}

impl RequestSigner for QuerySigner {
    fn sign(
        &self,
        endpoint: &ResolvedEndpoint,
        credentials: &Credentials,
        params: &Params,
    ) -> Result<SignedRequest> {
        if endpoint.is_private() {
            credentials.require(endpoint.name)?;
        }
        self.sign_with_nonce(endpoint, credentials, params, self.nonce.next())
    }
}

/// Header names used by the payload-signature scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadHeaders {
    pub api_key: String,
    pub payload: String,
    pub signature: String,
}

impl Default for PayloadHeaders {
    fn default() -> Self {
        Self {
            api_key: "X-API-KEY".to_string(),
            payload: "X-API-PAYLOAD".to_string(),
            signature: "X-API-SIGNATURE".to_string(),
        }
    }
}

/// Signs a base64 JSON payload (HMAC-SHA384) sent alongside the JSON body
#[derive(Debug)]
pub struct PayloadSigner {
    api_url: Url,
    version: &'static str,
    headers: PayloadHeaders,
    nonce: Arc<NonceSource>,
}

impl PayloadSigner {
    pub fn new(catalog: &Catalog, nonce: Arc<NonceSource>) -> Result<Self> {
        Ok(Self {
            api_url: catalog.api_url()?,
            version: catalog.version(),
            headers: PayloadHeaders::default(),
            nonce,
        })
    }

    pub fn with_headers(mut self, headers: PayloadHeaders) -> Self {
        self.headers = headers;
        self
    }

    /// Sign with an explicit nonce
    pub fn sign_with_nonce(
        &self,
        endpoint: &ResolvedEndpoint,
        credentials: &Credentials,
        params: &Params,
        nonce: u64,
    ) -> Result<SignedRequest> {
        if !endpoint.is_private() {
            let mut url = format!("{}{}", self.api_url, endpoint.path);
            append_query(&mut url, params.iter().map(|(key, value)| (key, param_text(value))));
            return Ok(SignedRequest {
                endpoint: endpoint.name,
                url: Url::parse(&url)?,
                method: HttpMethod::Get,
                headers: Vec::new(),
                body: None,
            });
        }

        let (key, secret) = credentials.require(endpoint.name)?;
        let request_path = format!("/{}/{}", self.version, endpoint.path_only());
        let body = payload_body(endpoint.name, &request_path, nonce, params)?;
        let payload = BASE64.encode(&body);
        let signature = HmacSigner::new(secret).sha384_hex(payload.as_bytes())?;

        Ok(SignedRequest {
            endpoint: endpoint.name,
            url: Url::parse(&format!("{}{}", self.api_url, endpoint.path))?,
            method: HttpMethod::Post,
            headers: vec![
                (self.headers.api_key.clone(), key.to_string()),
                (self.headers.payload.clone(), payload),
                (self.headers.signature.clone(), signature),
            ],
            body: Some(body),
        })
    }
}

impl RequestSigner for PayloadSigner {
    fn sign(
        &self,
        endpoint: &ResolvedEndpoint,
        credentials: &Credentials,
        params: &Params,
    ) -> Result<SignedRequest> {
        if !endpoint.is_private() {
            return self.sign_with_nonce(endpoint, credentials, params, 0);
        }
        credentials.require(endpoint.name)?;
        self.sign_with_nonce(endpoint, credentials, params, self.nonce.next())
    }
}

/// Canonical JSON body: sorted keys, no whitespace
fn payload_body(endpoint: &str, request_path: &str, nonce: u64, params: &Params) -> Result<Vec<u8>> {
    reject_reserved(endpoint, params, &RESERVED_BODY_KEYS, "signed payload")?;

    let mut body: BTreeMap<&str, Value> = params
        .iter()
        .map(|(key, value)| (key.as_str(), value.clone()))
        .collect();
    body.insert("request", Value::String(request_path.to_string()));
    body.insert("nonce", Value::String(nonce.to_string()));

    Ok(serde_json::to_vec(&body)?)
}

fn reject_reserved(endpoint: &str, params: &Params, reserved: &[&str], owner: &str) -> Result<()> {
    match reserved.iter().find(|key| params.contains_key(**key)) {
        Some(key) => Err(ExchangeError::malformed(
            endpoint,
            format!("parameter `{key}` is reserved for the {owner}"),
        )),
        None => Ok(()),
    }
}

fn param_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
