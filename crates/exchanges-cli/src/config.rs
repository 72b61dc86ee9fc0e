/*
[INPUT]:  YAML configuration file
[OUTPUT]: Per-exchange credentials, base URLs, and timeouts
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::fmt;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;

use exchanges_adapter::{ClientConfig, Credentials};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the CLI
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub bittrex: ExchangeConfig,
    #[serde(default)]
    pub bitfinex: ExchangeConfig,
}

/// Settings for one exchange
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct ExchangeConfig {
    /// API key; omit for public-only access
    #[serde(default)]
    pub api_key: Option<String>,
    /// API secret; omit for public-only access
    #[serde(default)]
    pub api_secret: Option<String>,
    /// Override the exchange host (e.g. a sandbox)
    #[serde(default)]
    pub base_url: Option<String>,
    /// Whole-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Connect timeout in seconds
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl ExchangeConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.api_key.clone(), self.api_secret.clone())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: self.timeout_secs.map(Duration::from_secs),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
        }
    }
}

impl fmt::Debug for ExchangeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse {}", path.display()))?;
        Ok(config)
    }
}
