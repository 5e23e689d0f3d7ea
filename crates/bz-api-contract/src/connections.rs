// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Connection shapes for `api/v2/connections`

use serde::{Deserialize, Serialize};

use crate::common::TargetType;
use crate::macros::api_enum;
use crate::policies::VerbType;
use crate::serde_helpers::null_as_default;
use crate::timestamp::Timestamp;

api_enum! {
    pub enum ConnectionState {
        Open => "Open",
        Closed => "Closed",
        Error => "Error",
        Pending => "Pending",
    }
}

api_enum! {
    pub enum ConnectionType {
        Shell => "Shell",
        Dynamic => "Dynamic",
        Kube => "Kube",
        Web => "Web",
        Db => "Db",
        Ssh => "Ssh",
    }
}

api_enum! {
    /// Lifecycle of a dynamically provisioned target
    pub enum DatState {
        Starting => "Starting",
        Started => "Started",
        StartError => "StartError",
        Stopping => "Stopping",
        Stopped => "Stopped",
        StopError => "StopError",
    }
}

/// Query filters for the connection list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListConnectionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_state: Option<ConnectionState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateConnectionResponse {
    pub connection_id: String,
}

/// Fields common to every connection kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Connection {
    pub id: String,
    pub time_created: Timestamp,
    pub state: ConnectionState,
    #[serde(rename = "targetID")]
    pub target_id: String,
    pub target_type: TargetType,
    pub subject_id: String,
}

/// Read access shared by connection kinds
pub trait ConnectionInterface {
    fn connection(&self) -> &Connection;

    fn id(&self) -> &str {
        &self.connection().id
    }

    fn time_created(&self) -> Timestamp {
        self.connection().time_created
    }

    fn state(&self) -> ConnectionState {
        self.connection().state
    }

    fn target_id(&self) -> &str {
        &self.connection().target_id
    }

    fn target_type(&self) -> TargetType {
        self.connection().target_type
    }

    fn subject_id(&self) -> &str {
        &self.connection().subject_id
    }
}

impl ConnectionInterface for Connection {
    fn connection(&self) -> &Connection {
        self
    }
}

macro_rules! impl_connection_interface {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ConnectionInterface for $ty {
                fn connection(&self) -> &Connection {
                    &self.connection
                }
            }
        )+
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShellConnectionRequest {
    pub space_id: String,
    pub target_id: String,
    pub target_type: TargetType,
    pub target_user: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellConnection {
    #[serde(flatten)]
    pub connection: Connection,
    pub space_id: String,
    pub target_user: String,
    pub session_recording_available: bool,
    pub session_recording: bool,
    pub input_recording: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSshConnectionRequest {
    pub target_id: String,
    pub target_user: String,
    pub remote_host: String,
    pub remote_port: u16,
    pub scp_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SshConnection {
    #[serde(flatten)]
    pub connection: Connection,
    pub target_user: String,
    pub remote_host: String,
    pub remote_port: u16,
    pub target_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDbConnectionRequest {
    pub target_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_user: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DbConnection {
    #[serde(flatten)]
    pub connection: Connection,
    pub remote_host: String,
    pub remote_port: u16,
    pub target_name: String,
    pub target_user: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKubeConnectionRequest {
    pub target_user: String,
    pub target_groups: Vec<String>,
    pub target_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KubeConnection {
    #[serde(flatten)]
    pub connection: Connection,
    pub target_user: String,
    #[serde(deserialize_with = "null_as_default")]
    pub target_groups: Vec<String>,
    pub target_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RdpConnection {
    #[serde(flatten)]
    pub connection: Connection,
    pub remote_host: String,
    pub remote_port: u16,
    pub target_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SqlServerConnection {
    #[serde(flatten)]
    pub connection: Connection,
    pub remote_host: String,
    pub remote_port: u16,
    pub target_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebConnectionRequest {
    pub target_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebConnection {
    #[serde(flatten)]
    pub connection: Connection,
    pub remote_host: String,
    pub remote_port: u16,
    pub target_name: String,
}

impl_connection_interface!(
    ShellConnection,
    SshConnection,
    DbConnection,
    KubeConnection,
    RdpConnection,
    SqlServerConnection,
    WebConnection,
);

/// State of a connection to a dynamic access target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DynamicAccessConnection {
    pub id: String,
    pub connection_state: ConnectionState,
    pub dynamic_access_target_state: DatState,
    pub provisioning_server_unique_id: String,
    pub provisioning_server_error_message: String,
}

/// Request for the universal connection endpoint.
///
/// The server resolves the target from whichever identifying fields are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUniversalConnectionRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_user: String,
    #[serde(rename = "envId", skip_serializing_if = "String::is_empty")]
    pub environment_id: String,
    #[serde(rename = "envName", skip_serializing_if = "String::is_empty")]
    pub environment_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_groups: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<TargetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verb_type: Option<VerbType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUniversalSshConnectionRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_name: String,
    pub target_user: String,
    pub remote_host: String,
    pub remote_port: u16,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub environment_name: String,
}

/// Details a client needs to reach the connection node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionAuthDetails {
    pub connection_node_id: String,
    pub auth_token: String,
    pub connection_service_url: String,
    pub region: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUniversalConnectionResponse {
    pub connection_id: String,
    pub target_id: String,
    pub target_name: String,
    pub target_user: String,
    pub target_type: TargetType,
    pub verb_type: VerbType,
    pub agent_public_key: String,
    pub agent_version: String,
    pub connection_auth_details: ConnectionAuthDetails,
    pub ssh_scp_only: bool,
    pub split_cert: bool,
}
