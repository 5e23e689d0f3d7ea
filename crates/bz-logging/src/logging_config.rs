// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! `[logging]` table of the CLI config file

use serde::{Deserialize, Serialize};

use crate::{CliLogLevel, CliLoggingArgs, LogFormat};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LoggingConfig {
    pub log_level: Option<CliLogLevel>,
    pub log_format: Option<LogFormat>,
    pub log_file: Option<String>,
}

impl LoggingConfig {
    /// Fill in whatever the command line left unset
    pub fn apply_to(&self, args: &mut CliLoggingArgs) {
        if args.log_level.is_none() {
            args.log_level = self.log_level;
        }
        if args.log_format.is_none() {
            args.log_format = self.log_format;
        }
        if args.log_file.is_none() {
            args.log_file.clone_from(&self.log_file);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_wins() {
        let config: LoggingConfig =
            toml::from_str("log-level = \"debug\"\nlog-format = \"json\"").unwrap();
        let mut args = CliLoggingArgs {
            log_level: Some(CliLogLevel::Warn),
            ..Default::default()
        };
        config.apply_to(&mut args);

        assert_eq!(args.log_level, Some(CliLogLevel::Warn));
        assert_eq!(args.log_format, Some(LogFormat::Json));
        assert!(args.log_file.is_none());
    }
}
