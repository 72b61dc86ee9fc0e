/*
[INPUT]:  Catalog, signing strategy, credentials, and HTTP configuration (timeouts)
[OUTPUT]: Generic exchange client: resolve -> sign -> dispatch
[POS]:    HTTP layer - core client composed by every exchange facade
[UPDATE]: When adding connection options or changing the call pipeline
*/

use std::time::Duration;

use tracing::debug;

use crate::auth::Credentials;
use crate::catalog::Catalog;
use crate::http::{Dispatcher, Params, RequestSigner, ResponseEnvelope, Result, SignedRequest};

/// HTTP client configuration
///
/// No timeout is applied unless one is set here.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }
}

/// Exchange-agnostic client
#[derive(Debug)]
pub struct ExchangeClient {
    catalog: Catalog,
    signer: Box<dyn RequestSigner>,
    dispatcher: Dispatcher,
    credentials: Credentials,
}

impl ExchangeClient {
    pub fn new(
        catalog: Catalog,
        signer: Box<dyn RequestSigner>,
        credentials: Credentials,
        config: &ClientConfig,
    ) -> Result<Self> {
        Ok(Self {
            catalog,
            signer,
            dispatcher: Dispatcher::new(config)?,
            credentials,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Resolve and sign without touching the network
    pub fn prepare(&self, name: &str, positional: &[&str], params: &Params) -> Result<SignedRequest> {
        let endpoint = self.catalog.resolve(name, positional, &[])?;
        self.signer.sign(&endpoint, &self.credentials, params)
    }

    /// Run one catalog operation
    ///
    /// `Err` only carries pre-flight failures (malformed endpoint, missing
    /// credentials). Transport failures come back as an unsuccessful envelope.
    pub async fn call(
        &self,
        name: &str,
        positional: &[&str],
        params: &Params,
    ) -> Result<ResponseEnvelope> {
        let request = self.prepare(name, positional, params)?;
        debug!(
            exchange = self.catalog.exchange(),
            endpoint = request.endpoint,
            "dispatching"
        );
        Ok(self.dispatcher.execute(request).await)
    }
}
