/*
[INPUT]:  Error sources (catalog resolution, credentials, transport, serialization)
[OUTPUT]: Structured error types split into pre-flight and runtime failures
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing the envelope boundary
*/

use thiserror::Error;

/// Main error type for the exchange adapter
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// Endpoint name, template, or parameters could not be turned into a request
    #[error("Malformed endpoint `{endpoint}`: {reason}")]
    MalformedEndpoint { endpoint: String, reason: String },

    /// Private endpoint called without a usable key/secret pair
    #[error("Missing credentials for private endpoint `{endpoint}`")]
    MissingCredentials { endpoint: String },

    /// Transport, timeout, DNS, or body decoding failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExchangeError {
    /// Build a `MalformedEndpoint` error
    pub fn malformed(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        ExchangeError::MalformedEndpoint {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// Build a `MissingCredentials` error
    pub fn missing_credentials(endpoint: impl Into<String>) -> Self {
        ExchangeError::MissingCredentials {
            endpoint: endpoint.into(),
        }
    }

    /// Check if the error is detected before any network I/O
    pub fn is_preflight(&self) -> bool {
        !matches!(self, ExchangeError::Communication(_))
    }

    /// Check if error indicates a credentials problem
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ExchangeError::MissingCredentials { .. })
    }
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL can carry `apikey` in its query string
        ExchangeError::Communication(err.without_url().to_string())
    }
}

/// Result type alias for exchange operations
pub type Result<T> = std::result::Result<T, ExchangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_preflight() {
        let malformed = ExchangeError::malformed("getticker", "missing argument");
        assert!(malformed.is_preflight());

        let transport = ExchangeError::Communication("connection refused".to_string());
        assert!(!transport.is_preflight());
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(ExchangeError::missing_credentials("getbalances").is_auth_error());
        assert!(!ExchangeError::Config("bad".to_string()).is_auth_error());
    }

    #[test]
    fn test_malformed_message() {
        let err = ExchangeError::malformed("book", "unbalanced brace");
        assert_eq!(
            err.to_string(),
            "Malformed endpoint `book`: unbalanced brace"
        );
    }
}
