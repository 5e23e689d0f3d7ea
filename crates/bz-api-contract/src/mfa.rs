// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! MFA shapes for `api/v2/mfa`

use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetMfaSecretRequest {
    pub force_setup: bool,
}

/// `otpauth://` URL for enrolling the new secret
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResetMfaSecretResponse {
    pub mfa_secret_url: String,
}

/// Names the user an admin MFA operation applies to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MfaUserRequest {
    pub user_id: String,
}

impl MfaUserRequest {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into() }
    }
}

pub type ClearMfaSecretRequest = MfaUserRequest;
pub type EnableMfaRequest = MfaUserRequest;
pub type DisableMfaRequest = MfaUserRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MfaStatus {
    pub enabled: bool,
    pub verified: bool,
    /// Only reported for the calling user
    pub session_verified: Option<bool>,
    pub grace_period_end_time: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_for_other_user_omits_session() {
        let status: MfaStatus = serde_json::from_value(json!({
            "enabled": true,
            "verified": false,
            "gracePeriodEndTime": "2024-09-09T09:09:09Z"
        }))
        .unwrap();
        assert!(status.enabled);
        assert!(status.session_verified.is_none());
        assert!(status.grace_period_end_time.is_some());
    }

    #[test]
    fn test_user_request_body() {
        assert_eq!(
            serde_json::to_value(EnableMfaRequest::new("u-42")).unwrap(),
            json!({"userId": "u-42"})
        );
    }
}
