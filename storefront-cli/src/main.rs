use anyhow::Context;
use clap::Parser;
use config_engine::{ConfigEngine, ConfigSource, StorefrontConfig};
use logger_redacted::init_logging;
use std::process::ExitCode;
use storefront::Storefront;
use tracing::debug;

mod cli;
mod commands;
mod render;

use cli::Cli;

/// Picked up from the working directory when present
const DEFAULT_CONFIG_FILE: &str = "medicart.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    init_logging(&config.logging).context("Failed to initialize logging")?;
    debug!(version = env!("CARGO_PKG_VERSION"), command = ?cli.command, "medicart starting");

    let mut shop = Storefront::from_config(&config)
        .await
        .context("Failed to open the storefront")?;

    Ok(commands::run(&mut shop, cli.command).await)
}

fn load_config(cli: &Cli) -> anyhow::Result<StorefrontConfig> {
    let mut engine = ConfigEngine::new().add_source(ConfigSource::file(DEFAULT_CONFIG_FILE));
    if let Some(path) = &cli.config {
        engine = engine.add_source(ConfigSource::required_file(path));
    }

    let mut config = engine
        .add_source(ConfigSource::env())
        .load()
        .context("Failed to load configuration")?;

    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    Ok(config)
}
