// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Per-kind target shapes for `api/v2/targets/{kind}`

use serde::{Deserialize, Serialize};

use crate::agents::ControlChannelSummary;
use crate::common::Port;
use crate::macros::api_enum;
use crate::policies::{TargetUser, Verb};
use crate::serde_helpers::null_as_default;
use crate::timestamp::Timestamp;

api_enum! {
    pub enum TargetStatus {
        NotActivated => "NotActivated",
        Offline => "Offline",
        Online => "Online",
        Terminated => "Terminated",
        Error => "Error",
        Restarting => "Restarting",
    }
}

api_enum! {
    pub enum DynamicAccessConfigurationStatus {
        Offline => "Offline",
        Online => "Online",
    }
}

/// Well-known values for [`DatabaseAuthenticationConfig`] fields
pub mod db_auth {
    pub const AUTH_DEFAULT: &str = "Default";
    pub const AUTH_SPLIT_CERT: &str = "SplitCert";
    pub const AUTH_SERVICE_ACCOUNT_INJECTION: &str = "ServiceAccountInjection";

    pub const PROVIDER_AWS: &str = "AWS";
    pub const PROVIDER_GCP: &str = "GCP";

    pub const DB_COCKROACH: &str = "CockroachDB";
    pub const DB_MICROSOFT_SQL_SERVER: &str = "MicrosoftSQLServer";
    pub const DB_MONGO: &str = "MongoDB";
    pub const DB_MYSQL: &str = "MySQL";
    pub const DB_POSTGRES: &str = "Postgres";
}

/// How the agent authenticates to a database target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatabaseAuthenticationConfig {
    pub authentication_type: Option<String>,
    pub cloud_service_provider: Option<String>,
    pub database: Option<String>,
    pub label: Option<String>,
}

/// A Linux or Windows host running the bzero agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BzeroTarget {
    pub id: String,
    pub name: String,
    pub status: TargetStatus,
    pub environment_id: String,
    pub last_agent_update: Option<Timestamp>,
    pub agent_version: String,
    pub region: String,
    pub agent_public_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_target_users: Vec<TargetUser>,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_verbs: Vec<Verb>,
    pub control_channel: Option<ControlChannelSummary>,
}

/// A Kubernetes cluster running the bzero agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterTarget {
    pub id: String,
    pub name: String,
    pub status: TargetStatus,
    pub environment_id: String,
    pub last_agent_update: Option<Timestamp>,
    pub agent_version: String,
    pub region: String,
    pub agent_public_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_cluster_users: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_cluster_groups: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub valid_cluster_users: Vec<String>,
    pub control_channel: Option<ControlChannelSummary>,
}

/// A web application proxied through an agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebTarget {
    pub id: String,
    pub name: String,
    pub status: TargetStatus,
    pub proxy_target_id: String,
    pub last_agent_update: Option<Timestamp>,
    pub agent_version: String,
    pub remote_host: String,
    pub remote_port: Port,
    pub local_port: Port,
    pub local_host: String,
    pub environment_id: String,
    pub region: String,
    pub agent_public_key: String,
}

/// Fields shared by targets reached through a proxy agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VirtualTarget {
    pub id: String,
    pub name: String,
    pub status: TargetStatus,
    pub environment_id: String,
    pub last_agent_update: Option<Timestamp>,
    pub agent_version: String,
    pub region: String,
    pub agent_public_key: String,
    pub proxy_target_id: String,
    pub remote_host: String,
    pub remote_port: Port,
    pub local_port: Port,
    pub local_host: String,
}

/// A database proxied through an agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatabaseTarget {
    #[serde(flatten)]
    pub virtual_target: VirtualTarget,
    #[serde(rename = "splitCert")]
    pub is_split_cert: bool,
    pub database_type: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_target_users: Vec<TargetUser>,
    pub database_authentication_config: DatabaseAuthenticationConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatabaseTargetRequest {
    pub target_name: String,
    pub proxy_target_id: String,
    pub remote_host: String,
    pub remote_port: Port,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_port: Option<Port>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub local_host: String,
    #[serde(rename = "splitCert", skip_serializing_if = "std::ops::Not::not")]
    pub is_split_cert: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub database_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub environment_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub environment_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_authentication_config: Option<DatabaseAuthenticationConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateDatabaseTargetResponse {
    pub target_id: String,
}

/// Partial update; unset fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyDatabaseTargetRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_target_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_port: Option<Port>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_port: Option<Port>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_host: Option<String>,
    #[serde(rename = "splitCert", skip_serializing_if = "Option::is_none")]
    pub is_split_cert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_authentication_config: Option<DatabaseAuthenticationConfig>,
}

/// Query filters for the database target list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListDatabaseTargetsOptions {
    #[serde(rename = "targetNames", skip_serializing_if = "Vec::is_empty")]
    pub target_names: Vec<String>,
    #[serde(rename = "targetIds", skip_serializing_if = "Vec::is_empty")]
    pub target_ids: Vec<String>,
    #[serde(rename = "envName", skip_serializing_if = "String::is_empty")]
    pub environment_name: String,
    #[serde(rename = "envId", skip_serializing_if = "String::is_empty")]
    pub environment_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSplitCertDatabaseTypesResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub databases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDynamicAccessConfigurationRequest {
    pub name: String,
    pub start_webhook: String,
    pub stop_webhook: String,
    pub health_webhook: String,
    pub environment_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_secret: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateDynamicAccessResponse {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyDynamicAccessConfigurationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_webhook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_webhook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_webhook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_secret: Option<String>,
}

/// Webhooks the server calls to provision targets on demand
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DynamicAccessConfiguration {
    pub id: String,
    pub name: String,
    pub environment_id: String,
    pub start_webhook: String,
    pub stop_webhook: String,
    pub health_webhook: String,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_target_users: Vec<TargetUser>,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_verbs: Vec<Verb>,
    pub status: DynamicAccessConfigurationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::policies::VerbType;
    use serde_json::json;

    #[test]
    fn test_database_target_flattens_virtual_target() {
        let target: DatabaseTarget = serde_json::from_value(json!({
            "id": "db-1",
            "name": "orders",
            "status": "Online",
            "proxyTargetId": "proxy-1",
            "remoteHost": "10.0.0.5",
            "remotePort": {"value": 5432},
            "localPort": {},
            "splitCert": true,
            "databaseType": "Postgres",
            "allowedTargetUsers": [{"userName": "reader"}],
            "databaseAuthenticationConfig": {
                "authenticationType": "SplitCert",
                "cloudServiceProvider": null,
                "database": "Postgres",
                "label": "Postgres (split cert)"
            }
        }))
        .unwrap();

        assert_eq!(target.virtual_target.remote_port.value, Some(5432));
        assert_eq!(target.virtual_target.local_port.value, None);
        assert!(target.is_split_cert);
        assert_eq!(
            target.database_authentication_config.authentication_type.as_deref(),
            Some(db_auth::AUTH_SPLIT_CERT)
        );
        assert_eq!(target.allowed_target_users[0].username, "reader");
    }

    #[test]
    fn test_create_database_request_omits_optional_fields() {
        let req = CreateDatabaseTargetRequest {
            target_name: "orders".to_string(),
            proxy_target_id: "proxy-1".to_string(),
            remote_host: "10.0.0.5".to_string(),
            remote_port: Port::new(5432),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "targetName": "orders",
                "proxyTargetId": "proxy-1",
                "remoteHost": "10.0.0.5",
                "remotePort": {"value": 5432}
            })
        );
    }

    #[test]
    fn test_bzero_target_with_null_lists() {
        let target: BzeroTarget = serde_json::from_value(json!({
            "id": "b-1",
            "status": "Offline",
            "allowedTargetUsers": null,
            "allowedVerbs": [{"type": "Tunnel"}],
            "controlChannel": null
        }))
        .unwrap();
        assert!(target.allowed_target_users.is_empty());
        assert_eq!(target.allowed_verbs[0].verb_type, VerbType::Tunnel);
        assert_eq!(target.status, TargetStatus::Offline);
    }

    #[test]
    fn test_modify_dac_request_sends_only_changes() {
        let req = ModifyDynamicAccessConfigurationRequest {
            health_webhook: Some("https://hooks.example.com/health".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"healthWebhook": "https://hooks.example.com/health"})
        );
    }
}
