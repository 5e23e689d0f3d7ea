// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Organization shapes for `api/v2/organization`

use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub is_single_user_organization: bool,
    pub time_created: Timestamp,
}

/// Identity provider details used to validate BastionZero certificates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BzCertValidationInfo {
    pub org_idp_provider: String,
    pub org_idp_issuer_id: String,
}

/// A group synced from the organization's identity provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    #[serde(rename = "idPGroupId")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlackIntegration {
    pub team_name: String,
    pub admin_email: String,
    pub creation_date: Timestamp,
    pub last_update_date: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationKeySettings {
    pub global_registration_key_enforced: bool,
    pub default_global_registration_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableGlobalRegistrationKeyRequest {
    /// Must name an existing registration API key
    pub default_registration_key_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityProvider {
    pub identity_provider_type: String,
    pub identity_provider_id: String,
}
