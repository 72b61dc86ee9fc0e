/*
[INPUT]:  Parsed CLI command, exchange selection, and configuration
[OUTPUT]: Pretty-printed catalogs or response envelopes
[POS]:    Command layer - maps CLI commands onto exchange clients
[UPDATE]: When adding commands or exchanges
*/

use anyhow::{Context, Result, bail};
use clap::{Subcommand, ValueEnum};
use exchanges_adapter::{
    BitfinexClient, BittrexClient, ExchangeClient, Params, Visibility, bitfinex, bittrex,
};
use serde_json::Value;
use tracing::info;

use crate::config::{CliConfig, ExchangeConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Exchange {
    Bittrex,
    Bitfinex,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every operation in the exchange catalog
    List,
    /// Invoke one catalog operation by name
    Call {
        /// Operation name, e.g. `getticker` or `order/new`
        endpoint: String,
        /// Positional values for the endpoint's placeholders
        args: Vec<String>,
        /// Extra parameters as key=value (query pairs or signed body fields)
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
}

/// Parse `key=value` pairs; values that parse as JSON keep their type
pub fn parse_params(raw: &[String]) -> Result<Params> {
    let mut params = Params::new();
    for pair in raw {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("parameter `{pair}` is not in key=value form");
        };
        let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
        params.insert(key.to_string(), value);
    }
    Ok(params)
}

/// Build the selected client and run the command, returning the printable output
pub async fn run(exchange: Exchange, config: &CliConfig, command: &Command) -> Result<String> {
    match exchange {
        Exchange::Bittrex => {
            let settings = &config.bittrex;
            let client = BittrexClient::with_config_and_base_url(
                settings.credentials(),
                settings.client_config(),
                base_url(settings, bittrex::API_URL),
            )
            .context("build bittrex client")?;
            execute(client.client(), command).await
        }
        Exchange::Bitfinex => {
            let settings = &config.bitfinex;
            let client = BitfinexClient::with_config_and_base_url(
                settings.credentials(),
                settings.client_config(),
                base_url(settings, bitfinex::API_URL),
            )
            .context("build bitfinex client")?;
            execute(client.client(), command).await
        }
    }
}

fn base_url<'a>(settings: &'a ExchangeConfig, default: &'a str) -> &'a str {
    settings.base_url.as_deref().unwrap_or(default)
}

async fn execute(client: &ExchangeClient, command: &Command) -> Result<String> {
    match command {
        Command::List => {
            let lines: Vec<String> = client
                .catalog()
                .endpoints()
                .map(|endpoint| {
                    let visibility = match endpoint.visibility {
                        Visibility::Public => "public",
                        Visibility::Private => "private",
                    };
                    format!(
                        "{:<22} {:<5} {:<8} {}",
                        endpoint.name, endpoint.method, visibility, endpoint.path
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
        Command::Call {
            endpoint,
            args,
            params,
        } => {
            let params = parse_params(params)?;
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            info!(
                exchange = client.catalog().exchange(),
                endpoint = %endpoint,
                "calling endpoint"
            );
            let envelope = client
                .call(endpoint, &args, &params)
                .await
                .with_context(|| format!("call {endpoint}"))?;
            serde_json::to_string_pretty(&envelope).context("serialize envelope")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_params() {
        let raw = vec![
            "symbol=btcusd".to_string(),
            "order_id=42".to_string(),
            "is_hidden=true".to_string(),
        ];
        let params = parse_params(&raw).unwrap();

        assert_eq!(params["symbol"], json!("btcusd"));
        assert_eq!(params["order_id"], json!(42));
        assert_eq!(params["is_hidden"], json!(true));
    }

    #[test]
    fn test_parse_params_rejects_bare_words() {
        assert!(parse_params(&["oops".to_string()]).is_err());
    }

    #[tokio::test]
    async fn test_list_bittrex() {
        let output = run(Exchange::Bittrex, &CliConfig::default(), &Command::List)
            .await
            .unwrap();
        assert!(output.contains("getticker"));
        assert!(output.contains("public/getticker?market={}"));
        assert_eq!(output.lines().count(), bittrex::ENDPOINTS.len());
    }
}
