/*
[INPUT]:  Optional API key/secret and HTTP configuration
[OUTPUT]: Bitfinex client exposing one method per v1 operation
[POS]:    Exchange facade - Bitfinex (payload-signature scheme)
[UPDATE]: When Bitfinex endpoints are added or renamed
*/

mod account;
mod public;
mod trade;

use crate::auth::{Credentials, NonceSource};
use crate::catalog::{Catalog, EndpointDescriptor, HttpMethod};
use crate::http::{
    ClientConfig, ExchangeClient, Params, PayloadHeaders, PayloadSigner, ResponseEnvelope, Result,
};

pub const EXCHANGE: &str = "bitfinex";
pub const API_URL: &str = "https://api.bitfinex.com/";
pub const API_VERSION: &str = "v1";

const fn signed(name: &'static str) -> EndpointDescriptor {
    EndpointDescriptor::private(name, name, HttpMethod::Post)
}

pub static ENDPOINTS: [EndpointDescriptor; 22] = [
    // public
    EndpointDescriptor::public("pubticker", "pubticker/{}"),
    EndpointDescriptor::public("stats", "stats/{}"),
    EndpointDescriptor::public("lendbook", "lendbook/{}?limit_bids={}&limit_asks={}")
        .with_defaults(&["50", "50"]),
    EndpointDescriptor::public("book", "book/{}?limit_bids={}&limit_asks={}&group={}")
        .with_defaults(&["50", "50", "1"]),
    EndpointDescriptor::public("trades", "trades/{}?limit_trades={}&timestamp={}")
        .with_defaults(&["50", ""]),
    EndpointDescriptor::public("lends", "lends/{}?limit_lends={}&timestamp={}")
        .with_defaults(&["50", ""]),
    EndpointDescriptor::public("symbols", "symbols"),
    EndpointDescriptor::public("symbols_details", "symbols_details"),
    // account
    signed("account_infos"),
    signed("summary"),
    signed("key_info"),
    signed("margin_infos"),
    signed("balances"),
    signed("history"),
    signed("deposit/new"),
    // trading
    signed("order/new"),
    signed("order/cancel"),
    signed("order/cancel/all"),
    signed("order/status"),
    signed("orders"),
    signed("positions"),
    signed("mytrades"),
];

/// Bitfinex v1 REST client
#[derive(Debug)]
pub struct BitfinexClient {
    inner: ExchangeClient,
}

impl BitfinexClient {
    /// Client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Client limited to public endpoints
    pub fn public() -> Result<Self> {
        Self::new(Credentials::anonymous())
    }

    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(credentials, config, API_URL)
    }

    /// Client pointed at a custom host (mock servers, proxies)
    pub fn with_config_and_base_url(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        Self::with_headers(credentials, config, base_url, PayloadHeaders::default())
    }

    /// Client with custom authentication header names
    pub fn with_headers(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
        headers: PayloadHeaders,
    ) -> Result<Self> {
        let catalog = Catalog::new(EXCHANGE, base_url, API_VERSION, &ENDPOINTS)?;
        let nonce = NonceSource::shared(EXCHANGE, credentials.key().unwrap_or_default());
        let signer = PayloadSigner::new(&catalog, nonce)?.with_headers(headers);
        let inner = ExchangeClient::new(catalog, Box::new(signer), credentials, &config)?;
        Ok(Self { inner })
    }

    /// Underlying generic client
    pub fn client(&self) -> &ExchangeClient {
        &self.inner
    }

    /// Run any catalog operation by name
    ///
    /// For private endpoints `params` become the signed JSON body; for public
    /// ones they are appended to the query string.
    pub async fn call(
        &self,
        name: &str,
        positional: &[&str],
        params: &Params,
    ) -> Result<ResponseEnvelope> {
        self.inner.call(name, positional, params).await
    }

    async fn query(&self, name: &str, positional: &[&str]) -> Result<ResponseEnvelope> {
        self.inner.call(name, positional, &Params::new()).await
    }

    async fn post(&self, name: &str, params: &Params) -> Result<ResponseEnvelope> {
        self.inner.call(name, &[], params).await
    }
}
