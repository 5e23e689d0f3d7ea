// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::Result;
use bz_cli::{Cli, Parser};
use bz_logging::redact;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let mut logging = cli.logging.clone();
    config.logging.apply_to(&mut logging);
    logging.init("bz-cli")?;

    debug!(
        base_url = config.client.base_url.as_deref().unwrap_or(bz_rest_client::DEFAULT_BASE_URL),
        api_secret = config.client.api_secret.as_ref().map(redact),
        "client configuration resolved"
    );

    let client = Cli::build_client(config)?;
    let output = cli.command.execute(&client).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
