/*
[INPUT]:  Per-exchange endpoint tables, base URL, and API version
[OUTPUT]: Immutable catalogs resolving operation names into relative paths
[POS]:    Catalog layer - declarative endpoint configuration
[UPDATE]: When adding exchanges or changing URL composition
*/

pub mod descriptor;

pub use descriptor::{EndpointDescriptor, HttpMethod, ResolvedEndpoint, Visibility, append_query};

use reqwest::Url;

use crate::http::{ExchangeError, Result};

/// Immutable endpoint configuration for one exchange
#[derive(Debug, Clone)]
pub struct Catalog {
    exchange: &'static str,
    base_url: Url,
    version: &'static str,
    endpoints: &'static [EndpointDescriptor],
}

impl Catalog {
    /// Build a catalog rooted at `base_url`
    pub fn new(
        exchange: &'static str,
        base_url: &str,
        version: &'static str,
        endpoints: &'static [EndpointDescriptor],
    ) -> Result<Self> {
        Ok(Self {
            exchange,
            base_url: parse_base_url(base_url)?,
            version,
            endpoints,
        })
    }

    /// Same catalog pointed at a different host
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn exchange(&self) -> &'static str {
        self.exchange
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Versioned API root, e.g. `https://bittrex.com/api/v1.1/`
    pub fn api_url(&self) -> Result<Url> {
        Ok(self.base_url.join(&format!("{}/", self.version))?)
    }

    /// Versioned absolute path used inside signed payloads, e.g. `/v1/balances`
    pub fn versioned_path(&self, endpoint: &ResolvedEndpoint) -> String {
        format!("/{}/{}", self.version, endpoint.path_only())
    }

    pub fn endpoints(&self) -> impl Iterator<Item = &EndpointDescriptor> {
        self.endpoints.iter()
    }

    pub fn lookup(&self, name: &str) -> Result<&EndpointDescriptor> {
        self.endpoints
            .iter()
            .find(|endpoint| endpoint.name == name)
            .ok_or_else(|| {
                ExchangeError::malformed(name, format!("unknown {} endpoint", self.exchange))
            })
    }

    /// Look up `name` and substitute its placeholders
    pub fn resolve(
        &self,
        name: &str,
        positional: &[&str],
        query: &[(&str, &str)],
    ) -> Result<ResolvedEndpoint> {
        self.lookup(name)?.resolve(positional, query)
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    if base_url.ends_with('/') {
        Ok(Url::parse(base_url)?)
    } else {
        Ok(Url::parse(&format!("{base_url}/"))?)
    }
}
