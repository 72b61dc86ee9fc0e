/*
[INPUT]:  CLI arguments and optional YAML configuration file
[OUTPUT]: Catalog listings or response envelopes printed as JSON
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use exchanges_cli::{CliConfig, Command, Exchange, run};

#[derive(Parser, Debug)]
#[command(name = "exchanges-cli", version, about = "Query exchange REST APIs through one interface")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[arg(value_enum)]
    exchange: Exchange,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = match &args.config_path {
        Some(path) => load_config(path)?,
        None => CliConfig::default(),
    };
    info!(exchange = ?args.exchange, "configuration loaded");

    let output = run(args.exchange, &config, &args.command).await?;
    println!("{output}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &Path) -> Result<CliConfig> {
    CliConfig::from_file(path).context("load config")
}
