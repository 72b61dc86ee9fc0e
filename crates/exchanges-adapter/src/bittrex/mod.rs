/*
[INPUT]:  Optional API key/secret and HTTP configuration
[OUTPUT]: Bittrex client exposing one method per v1.1 operation
[POS]:    Exchange facade - Bittrex (query-signature scheme)
[UPDATE]: When Bittrex endpoints are added or renamed
*/

mod account;
mod market;
mod public;

use crate::auth::{Credentials, NonceSource};
use crate::catalog::{Catalog, EndpointDescriptor, HttpMethod};
use crate::http::{ClientConfig, ExchangeClient, Params, QuerySigner, ResponseEnvelope, Result};

pub const EXCHANGE: &str = "bittrex";
pub const API_URL: &str = "https://bittrex.com/api/";
pub const API_VERSION: &str = "v1.1";

const fn account(name: &'static str, path: &'static str) -> EndpointDescriptor {
    EndpointDescriptor::private(name, path, HttpMethod::Get)
}

pub static ENDPOINTS: [EndpointDescriptor; 19] = [
    // public
    EndpointDescriptor::public("getcurrencies", "public/getcurrencies"),
    EndpointDescriptor::public("getmarkethistory", "public/getmarkethistory?market={}"),
    EndpointDescriptor::public("getmarkets", "public/getmarkets"),
    EndpointDescriptor::public("getmarketsummaries", "public/getmarketsummaries"),
    EndpointDescriptor::public("getmarketsummary", "public/getmarketsummary?market={}"),
    EndpointDescriptor::public("getorderbook", "public/getorderbook?market={}&type={}")
        .with_defaults(&["both"]),
    EndpointDescriptor::public("getticker", "public/getticker?market={}"),
    // account
    account("getwithdrawalhistory", "account/getwithdrawalhistory?currency={}"),
    account("getbalance", "account/getbalance?currency={}"),
    account("getbalances", "account/getbalances"),
    account("getdepositaddress", "account/getdepositaddress?currency={}"),
    account("getdeposithistory", "account/getdeposithistory?currency={}"),
    account("getorder", "account/getorder?uuid={}"),
    account("getorderhistory", "account/getorderhistory?market={}"),
    account("withdraw", "account/withdraw?currency={}&quantity={}&address={}"),
    // market
    account("getopenorders", "market/getopenorders?market={}").with_defaults(&[""]),
    account("buylimit", "market/buylimit?market={}&quantity={}&rate={}"),
    account("cancel", "market/cancel?uuid={}"),
    account("selllimit", "market/selllimit?market={}&quantity={}&rate={}"),
];

/// Bittrex v1.1 REST client
#[derive(Debug)]
pub struct BittrexClient {
    inner: ExchangeClient,
}

impl BittrexClient {
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
        let catalog = Catalog::new(EXCHANGE, base_url, API_VERSION, &ENDPOINTS)?;
        let nonce = NonceSource::shared(EXCHANGE, credentials.key().unwrap_or_default());
        let signer = QuerySigner::new(&catalog, nonce)?;
        let inner = ExchangeClient::new(catalog, Box::new(signer), credentials, &config)?;
        Ok(Self { inner })
    }

    /// Underlying generic client
    pub fn client(&self) -> &ExchangeClient {
        &self.inner
    }

    /// Run any catalog operation by name; `params` become extra query pairs
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_entries_are_valid() {
        let mut names = HashSet::new();
        for endpoint in &ENDPOINTS {
            assert!(names.insert(endpoint.name), "duplicate {}", endpoint.name);
            let placeholders = endpoint.placeholder_count().unwrap();
            let args = vec!["x"; placeholders];
            let resolved = endpoint.resolve(&args, &[]).unwrap();
            assert!(!resolved.path.contains('{'));
            assert_eq!(resolved.method, HttpMethod::Get);
        }
    }

    #[test]
    fn test_public_and_private_split() {
        let private: Vec<_> = ENDPOINTS
            .iter()
            .filter(|endpoint| endpoint.is_private())
            .map(|endpoint| endpoint.name)
            .collect();
        assert_eq!(private.len(), 12);
        assert!(!private.contains(&"getticker"));
        assert!(private.contains(&"buylimit"));
    }

    #[test]
    fn test_open_orders_market_defaults_to_empty() {
        let catalog = Catalog::new(EXCHANGE, API_URL, API_VERSION, &ENDPOINTS).unwrap();
        let resolved = catalog.resolve("getopenorders", &[], &[]).unwrap();
        assert_eq!(resolved.path, "market/getopenorders?market=");
    }
}
