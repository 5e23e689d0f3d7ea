// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! `bzero` config file: client settings at the top level, logging under `[logging]`

use std::path::{Path, PathBuf};

use anyhow::Context;
use bz_logging::LoggingConfig;
use bz_rest_client::ClientConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    #[serde(flatten)]
    pub client: ClientConfig,
    pub logging: LoggingConfig,
}

impl CliConfig {
    pub fn from_toml_str(input: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load `explicit` when given, otherwise the default file if it exists
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.is_file() => path,
                _ => return Ok(Self::default()),
            },
        };
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }
}

/// `<config dir>/bastionzero/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bastionzero").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bz_logging::CliLogLevel;

    #[test]
    fn test_client_and_logging_sections() {
        let config = CliConfig::from_toml_str(
            r#"
            base-url = "https://bz.example.com"
            timeout-secs = 10

            [headers]
            X-Team = "platform"

            [logging]
            log-level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.client.base_url.as_deref(), Some("https://bz.example.com"));
        assert_eq!(config.client.timeout_secs, Some(10));
        assert_eq!(config.client.headers.len(), 1);
        assert_eq!(config.logging.log_level, Some(CliLogLevel::Debug));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_default_path_location() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("bastionzero/config.toml"));
        }
    }
}
