// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

pub mod commands;
pub mod config;

use std::path::PathBuf;

use bz_logging::CliLoggingArgs;
use bz_rest_client::RestClient;
pub use clap::Parser;

use crate::commands::Commands;
use crate::config::CliConfig;

#[derive(clap::Parser, Debug)]
#[command(
    name = "bzero",
    about = "Query and manage a BastionZero organization",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Config file (default: <config dir>/bastionzero/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// API endpoint
    #[arg(long, global = true, env = "BASTIONZERO_BASE_URL")]
    pub base_url: Option<String>,
    /// API key secret
    #[arg(long, global = true, env = "BASTIONZERO_API_SECRET", hide_env_values = true)]
    pub api_secret: Option<String>,
    #[command(flatten)]
    pub logging: CliLoggingArgs,
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Config file values with command-line flags applied on top
    pub fn resolve_config(&self) -> anyhow::Result<CliConfig> {
        let mut config = CliConfig::load(self.config.as_deref())?;
        if let Some(base_url) = &self.base_url {
            config.client.base_url = Some(base_url.clone());
        }
        if let Some(secret) = &self.api_secret {
            config.client.api_secret = Some(secret.clone());
        }
        Ok(config)
    }

    pub fn build_client(config: CliConfig) -> anyhow::Result<RestClient> {
        let client = config
            .client
            .into_builder()?
            .user_agent(concat!("bzero/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{PolicyKind, TargetKind};
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base-url = \"https://file.example.com\"\napi-secret = \"ZmlsZQ==\"\n")
            .unwrap();

        let cli = Cli::try_parse_from([
            "bzero",
            "--config",
            path.to_str().unwrap(),
            "--base-url",
            "https://flag.example.com",
            "me",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.client.base_url.as_deref(), Some("https://flag.example.com"));
        if std::env::var_os("BASTIONZERO_API_SECRET").is_none() {
            assert_eq!(config.client.api_secret.as_deref(), Some("ZmlsZQ=="));
        }

        let client = Cli::build_client(config).unwrap();
        assert!(client.user_agent().starts_with("bzero/"));
    }

    #[test]
    fn test_subcommand_parsing() {
        let cli = Cli::try_parse_from(["bzero", "targets", "list", "--kind", "dac"]).unwrap();
        assert!(matches!(cli.command, Commands::Targets { .. }));
        if let Commands::Targets { subcommand } = cli.command {
            let commands::TargetCommands::List { kind } = subcommand;
            assert_eq!(kind, TargetKind::Dac);
        }

        let cli =
            Cli::try_parse_from(["bzero", "policies", "list", "--kind", "session-recording"]).unwrap();
        if let Commands::Policies { subcommand } = cli.command {
            let commands::PolicyCommands::List { kind } = subcommand;
            assert_eq!(kind, PolicyKind::SessionRecording);
        } else {
            panic!("expected policies command");
        }

        assert!(Cli::try_parse_from(["bzero", "policies", "list"]).is_err());
        assert!(Cli::try_parse_from(["bzero", "connections", "close"]).is_err());
    }
}
