/*
[INPUT]:  Optional API key and secret supplied at client construction
[OUTPUT]: Validated key/secret pair for private endpoints
[POS]:    Auth layer - credential ownership and pre-flight checks
[UPDATE]: When changing credential sources or validation rules
*/

use std::fmt;

use crate::http::{ExchangeError, Result};

/// API key and secret for authenticated requests
///
/// `Debug` never prints either value.
#[derive(Clone, Default)]
pub struct Credentials {
    key: Option<String>,
    secret: Option<String>,
}

impl Credentials {
    pub fn new(key: Option<String>, secret: Option<String>) -> Self {
        Self { key, secret }
    }

    /// Credentials for public-only clients
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// API key, if configured
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn has_key(&self) -> bool {
        self.key.as_deref().is_some_and(|key| !key.is_empty())
    }

    pub fn has_secret(&self) -> bool {
        self.secret.as_deref().is_some_and(|secret| !secret.is_empty())
    }

    /// Key and secret, or `MissingCredentials` if either is absent or empty
    pub fn require(&self, endpoint: &str) -> Result<(&str, &str)> {
        match (self.key.as_deref(), self.secret.as_deref()) {
            (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => Ok((key, secret)),
            _ => Err(ExchangeError::missing_credentials(endpoint)),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
