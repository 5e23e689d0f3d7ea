// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Service account shapes for `api/v2/service-accounts`

use serde::{Deserialize, Serialize};

use crate::common::{SubjectInterface, SubjectRef, SubjectType};
use crate::timestamp::Timestamp;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceAccountRequest {
    pub email: String,
    pub jwks_url: String,
    pub jwks_url_pattern: String,
    pub external_id: String,
}

/// The MFA secret is only ever returned here, at creation time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateServiceAccountResponse {
    pub service_account_summary: ServiceAccount,
    pub mfa_secret: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyServiceAccountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceAccount {
    #[serde(flatten)]
    pub subject: SubjectRef,
    pub organization_id: String,
    pub email: String,
    pub external_id: String,
    pub jwks_url: String,
    pub jwks_url_pattern: String,
    pub is_admin: bool,
    pub time_created: Timestamp,
    pub last_login: Option<Timestamp>,
    pub created_by: String,
    pub enabled: bool,
}

impl SubjectInterface for ServiceAccount {
    fn id(&self) -> &str {
        &self.subject.id
    }

    fn subject_type(&self) -> SubjectType {
        SubjectType::ServiceAccount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_uses_jwks_keys() {
        let req = CreateServiceAccountRequest {
            email: "deployer@project.iam.gserviceaccount.com".to_string(),
            jwks_url: "https://www.googleapis.com/service_accounts/v1/jwk/deployer".to_string(),
            jwks_url_pattern: "https://www.googleapis.com/service_accounts/v1/jwk/*".to_string(),
            external_id: "1234".to_string(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("jwksUrl").is_some());
        assert!(value.get("jwksUrlPattern").is_some());
        assert_eq!(value["externalId"], "1234");
    }

    #[test]
    fn test_modify_request_omits_unset_flags() {
        let req = ModifyServiceAccountRequest {
            enabled: Some(false),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"enabled": false}));
    }

    #[test]
    fn test_create_response_nests_summary() {
        let resp: CreateServiceAccountResponse = serde_json::from_value(json!({
            "serviceAccountSummary": {"id": "sa-1", "enabled": true},
            "mfaSecret": "JBSWY3DPEHPK3PXP"
        }))
        .unwrap();
        assert_eq!(resp.service_account_summary.id(), "sa-1");
        assert!(resp.service_account_summary.enabled);
        assert_eq!(resp.mfa_secret, "JBSWY3DPEHPK3PXP");
    }
}
