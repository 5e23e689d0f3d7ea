// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for API contract validation and parsing

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during API contract validation and parsing
#[derive(Debug, Error)]
pub enum ApiContractError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{value} does not belong to {kind} values")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{0}")]
    Invalid(String),
}

/// Error body returned by the API alongside a non-2xx status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    #[serde(rename = "errorMsg", deserialize_with = "crate::serde_helpers::null_as_default")]
    pub error_message: String,
    #[serde(rename = "errorType", deserialize_with = "crate::serde_helpers::null_as_default")]
    pub error_type: String,
    /// Per-property validation failures
    #[serde(
        rename = "errors",
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub validation_errors: BTreeMap<String, Vec<String>>,
}

impl ApiErrorBody {
    /// Build an error body that carries only a raw message
    pub fn from_raw_message(message: impl Into<String>) -> Self {
        Self {
            error_message: message.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.error_message.is_empty()
            && self.error_type.is_empty()
            && self.validation_errors.is_empty()
    }
}
