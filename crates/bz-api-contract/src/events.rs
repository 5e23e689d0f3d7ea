// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Audit event shapes for `api/v2/events`

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::{SubjectType, TargetType};
use crate::macros::api_enum;
use crate::serde_helpers::{is_zero, null_as_default};
use crate::timestamp::Timestamp;

api_enum! {
    pub enum ConnectionEventType {
        Created => "Created",
        Closed => "Closed",
        ClientConnect => "ClientConnect",
        ClientDisconnect => "ClientDisconnect",
        ShellConnect => "ShellConnect",
        ShellDisconnect => "ShellDisconnect",
    }
}

/// Filters for subject (API call) events.
///
/// List filters are sent as repeated query keys. `event_count` of zero leaves
/// the page size to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectEventOptions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subject_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subject_types: Vec<SubjectType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subject_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ip_addresses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_timestamp: Option<Timestamp>,
    #[serde(skip_serializing_if = "is_zero")]
    pub event_count: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub service_actions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubjectEvent {
    pub id: String,
    pub organization_id: String,
    pub subject_id: String,
    pub subject_type: SubjectType,
    pub subject_name: String,
    pub is_admin: bool,
    pub service_action: String,
    pub resource: String,
    pub evaluation: bool,
    pub timestamp: Timestamp,
    pub ip_address: String,
    pub context: String,
}

/// Filters for connection lifecycle events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionEventOptions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subject_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subject_types: Vec<SubjectType>,
    #[serde(rename = "userNames", skip_serializing_if = "Vec::is_empty")]
    pub subject_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ip_addresses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_timestamp: Option<Timestamp>,
    #[serde(skip_serializing_if = "is_zero")]
    pub event_count: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connection_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub space_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub space_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_types: Vec<TargetType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_users: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub environment_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub environment_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connection_event_types: Vec<ConnectionEventType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connection_node_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionEvent {
    pub id: String,
    pub connection_id: String,
    pub subject_id: String,
    pub subject_type: SubjectType,
    pub subject_name: String,
    pub organization_id: String,
    pub session_id: String,
    pub session_name: String,
    pub target_id: String,
    /// Kept as text: the server reports kinds beyond [`TargetType`] here
    pub target_type: String,
    pub target_name: String,
    pub target_user: String,
    pub environment_id: String,
    pub environment_name: String,
    pub timestamp: Timestamp,
    pub connection_event_type: ConnectionEventType,
    pub reason: String,
    pub connection_node_id: String,
}

/// Filters for shell command events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandEventOptions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subject_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subject_types: Vec<SubjectType>,
    #[serde(rename = "userNames", skip_serializing_if = "Vec::is_empty")]
    pub subject_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ip_addresses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_timestamp: Option<Timestamp>,
    #[serde(skip_serializing_if = "is_zero")]
    pub event_count: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connection_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub space_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub space_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_types: Vec<TargetType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_users: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub environment_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub environment_names: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub command_search: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommandEvent {
    pub id: String,
    pub connection_id: String,
    pub target_id: String,
    pub target_type: String,
    pub target_name: String,
    pub subject_id: String,
    pub subject_type: SubjectType,
    pub subject_name: String,
    pub organization_id: String,
    pub timestamp: Timestamp,
    pub target_user: String,
    pub environment_id: String,
    pub environment_name: String,
    pub command: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KubernetesEventEndpoint {
    pub id: String,
    pub time_created: Timestamp,
    pub event: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KubernetesEventExecCommand {
    pub id: String,
    pub time_created: Timestamp,
    pub event: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KubernetesEvent {
    pub id: String,
    pub organization_id: String,
    pub creation_date: Timestamp,
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub target_groups: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub endpoints: Vec<KubernetesEventEndpoint>,
    #[serde(deserialize_with = "null_as_default")]
    pub exec_commands: Vec<KubernetesEventExecCommand>,
    pub kube_english_command: String,
    pub status_code: i32,
    pub user_id: String,
    pub cluster_id: String,
    pub target_name: String,
    pub user_email: String,
}

/// Filters for agent status transitions. `target_id` is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AgentStatusChangeEventOptions {
    #[validate(length(min = 1, message = "TargetID is required"))]
    pub target_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_timestamp: Option<Timestamp>,
}

impl AgentStatusChangeEventOptions {
    pub fn for_target(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentStatusChangeEvent {
    pub status_change: String,
    #[serde(rename = "timeStamp")]
    pub timestamp: Timestamp,
    pub reason: String,
    pub agent_public_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_connection_options_send_subject_names_as_user_names() {
        let opts = ConnectionEventOptions {
            subject_names: vec!["alice@example.com".to_string()],
            target_types: vec![TargetType::Bzero, TargetType::Db],
            event_count: 25,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&opts).unwrap(),
            json!({
                "userNames": ["alice@example.com"],
                "targetTypes": ["Bzero", "Db"],
                "eventCount": 25
            })
        );
    }

    #[test]
    fn test_subject_options_keep_subject_names_key() {
        let opts = SubjectEventOptions {
            subject_names: vec!["bob".to_string()],
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&opts).unwrap(), json!({"subjectNames": ["bob"]}));
    }

    #[test]
    fn test_empty_options_encode_to_empty_object() {
        assert_eq!(serde_json::to_value(CommandEventOptions::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_agent_status_change_event_uses_time_stamp_key() {
        let event: AgentStatusChangeEvent = serde_json::from_value(json!({
            "statusChange": "OnlineToOffline",
            "timeStamp": "2024-04-04T04:04:04Z",
            "reason": "heartbeat lost"
        }))
        .unwrap();
        assert_eq!(event.timestamp.to_rfc3339(), "2024-04-04T04:04:04Z");
    }

    #[test]
    fn test_agent_status_options_require_target() {
        assert!(AgentStatusChangeEventOptions::default().validate().is_err());
        assert!(AgentStatusChangeEventOptions::for_target("t-1").validate().is_ok());
    }

    #[test]
    fn test_kubernetes_event_null_lists() {
        let event: KubernetesEvent = serde_json::from_value(json!({
            "id": "k-1",
            "targetGroups": null,
            "endpoints": [{"id": "e-1", "event": "/api/v1/pods"}],
            "execCommands": null,
            "statusCode": 200
        }))
        .unwrap();
        assert!(event.target_groups.is_empty());
        assert_eq!(event.endpoints.len(), 1);
        assert_eq!(event.status_code, 200);
    }
}
