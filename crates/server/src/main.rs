//! Slide deck server binary.

use anyhow::{Context, Result};
use clap::Parser;
use slides_server::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();

    slides_server::serve(&config)
        .await
        .context("Server error")?;

    Ok(())
}
