// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! File and environment configuration for [`RestClient`](crate::RestClient)

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use bz_api_contract::validation::validate_base_url;
use serde::{Deserialize, Serialize};

use crate::client::{RestClient, RestClientBuilder};
use crate::error::{RestClientError, RestClientResult};

pub const ENV_API_SECRET: &str = "BASTIONZERO_API_SECRET";
pub const ENV_BASE_URL: &str = "BASTIONZERO_BASE_URL";

/// Client settings as they appear in a TOML config file
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    #[serde(rename = "base-url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(rename = "user-agent", skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(rename = "api-secret", skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<String>,
    #[serde(rename = "timeout-secs", skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ClientConfig {
    pub fn from_toml_str(input: &str) -> RestClientResult<Self> {
        toml::from_str(input).map_err(|e| RestClientError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> RestClientResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| RestClientError::Config(format!("{}: {e}", path.display())))
    }

    /// Apply `BASTIONZERO_API_SECRET` and `BASTIONZERO_BASE_URL` from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_env_overrides_from(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::with_env_overrides`] with a custom variable lookup.
    /// Empty values are ignored.
    pub fn with_env_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(secret) = lookup(ENV_API_SECRET) {
            self.api_secret = Some(secret);
        }
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = Some(base_url);
        }
        self
    }

    pub fn into_builder(self) -> RestClientResult<RestClientBuilder> {
        let mut builder = RestClient::builder();
        if let Some(base_url) = self.base_url {
            validate_base_url(&base_url).map_err(|e| RestClientError::Config(e.to_string()))?;
            builder = builder.base_url(base_url);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if let Some(secret) = self.api_secret {
            builder = builder.api_secret(secret);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder.headers(self.headers))
    }

    pub fn build(self) -> RestClientResult<RestClient> {
        self.into_builder()?.build()
    }
}
