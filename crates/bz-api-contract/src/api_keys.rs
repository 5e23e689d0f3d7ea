// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! API key shapes for `api/v2/api-keys`

use serde::{Deserialize, Serialize};

use crate::common::{SubjectInterface, SubjectRef, SubjectType};
use crate::timestamp::Timestamp;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGlobalApiKeyRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub is_registration_key: bool,
}

/// `secret` is returned once and cannot be fetched again
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateGlobalApiKeyResponse {
    pub api_key_details: ApiKey,
    pub secret: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModifyApiKeyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiKey {
    #[serde(flatten)]
    pub subject: SubjectRef,
    pub name: String,
    pub time_created: Timestamp,
    pub is_registration_key: bool,
}

impl SubjectInterface for ApiKey {
    fn id(&self) -> &str {
        &self.subject.id
    }

    fn subject_type(&self) -> SubjectType {
        SubjectType::ApiKey
    }
}
