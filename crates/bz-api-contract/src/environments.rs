// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Environment shapes for `api/v2/environments`

use serde::{Deserialize, Serialize};

use crate::common::TargetType;
use crate::serde_helpers::null_as_default;
use crate::timestamp::Timestamp;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnvironmentRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Hours an offline target is kept before the server removes it; 0 disables cleanup
    pub offline_cleanup_timeout_hours: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateEnvironmentResponse {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyEnvironmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline_cleanup_timeout_hours: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TargetSummary {
    pub id: String,
    pub target_type: TargetType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Environment {
    pub id: String,
    pub organization_id: String,
    pub is_default: bool,
    pub name: String,
    pub description: Option<String>,
    pub time_created: Timestamp,
    pub offline_cleanup_timeout_hours: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub targets: Vec<TargetSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_environment_decode() {
        let env: Environment = serde_json::from_value(json!({
            "id": "e-1",
            "isDefault": true,
            "name": "Default",
            "description": null,
            "timeCreated": "2022-12-12T12:12:12Z",
            "offlineCleanupTimeoutHours": 2160,
            "targets": [{"id": "t-1", "targetType": "Cluster"}]
        }))
        .unwrap();
        assert!(env.is_default);
        assert!(env.description.is_none());
        assert_eq!(env.targets[0].target_type, TargetType::Cluster);
    }

    #[test]
    fn test_create_request_always_sends_cleanup_hours() {
        let req = CreateEnvironmentRequest {
            name: "staging".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"name": "staging", "offlineCleanupTimeoutHours": 0})
        );
    }
}
