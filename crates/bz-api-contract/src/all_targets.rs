// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Access-oriented view of every target kind, served by `GET api/v2/targets`.
//!
//! Unlike the per-kind endpoints in [`crate::targets`], these records are
//! grouped by what a subject can do with them (shell, ssh, file transfer...)
//! and carry the subject's open connections and JIT access details.

use serde::{Deserialize, Serialize};

use crate::agents::AgentSummary;
use crate::common::Port;
use crate::connections::{
    ConnectionState, DbConnection, KubeConnection, RdpConnection, ShellConnection, SqlServerConnection,
    SshConnection, WebConnection,
};
use crate::policies::TargetUser;
use crate::serde_helpers::null_as_default;
use crate::targets::{DatabaseAuthenticationConfig, TargetStatus};
use crate::timestamp::Timestamp;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessDetails {
    pub jit: bool,
    pub access_expiration_time: Timestamp,
}

/// Fields common to every all-targets record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Target {
    pub id: String,
    pub name: String,
    pub status: TargetStatus,
    pub environment_id: String,
    pub environment_name: String,
    pub agent: Option<AgentSummary>,
    pub access_details: Option<AccessDetails>,
}

pub trait TargetInterface {
    fn target(&self) -> &Target;

    fn id(&self) -> &str {
        &self.target().id
    }

    fn name(&self) -> &str {
        &self.target().name
    }

    fn status(&self) -> TargetStatus {
        self.target().status
    }

    fn environment_id(&self) -> &str {
        &self.target().environment_id
    }

    fn environment_name(&self) -> &str {
        &self.target().environment_name
    }

    fn agent(&self) -> Option<&AgentSummary> {
        self.target().agent.as_ref()
    }

    fn access_details(&self) -> Option<&AccessDetails> {
        self.target().access_details.as_ref()
    }
}

impl TargetInterface for Target {
    fn target(&self) -> &Target {
        self
    }
}

macro_rules! impl_target_interface {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl TargetInterface for $ty {
                fn target(&self) -> &Target {
                    &self.target
                }
            }
        )+
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatabaseTarget {
    #[serde(flatten)]
    pub target: Target,
    pub proxy_agent_id: String,
    pub proxy_agent_name: String,
    pub remote_host: String,
    pub remote_port: Port,
    pub local_host: String,
    pub local_port: Option<Port>,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_target_users: Vec<TargetUser>,
    #[serde(deserialize_with = "null_as_default")]
    pub connections: Vec<DbConnection>,
    pub database_authentication_config: DatabaseAuthenticationConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KubeTarget {
    #[serde(flatten)]
    pub target: Target,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_cluster_users: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_cluster_groups: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub valid_cluster_users: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub connections: Vec<KubeConnection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileTransferTarget {
    #[serde(flatten)]
    pub target: Target,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_target_users: Vec<TargetUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RdpTarget {
    #[serde(flatten)]
    pub target: Target,
    pub remote_host: String,
    pub remote_port: Port,
    #[serde(deserialize_with = "null_as_default")]
    pub connections: Vec<RdpConnection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellTarget {
    #[serde(flatten)]
    pub target: Target,
    pub dynamic_access: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_target_users: Vec<TargetUser>,
    #[serde(deserialize_with = "null_as_default")]
    pub connections: Vec<ShellConnection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SqlServerTarget {
    #[serde(flatten)]
    pub target: Target,
    pub remote_host: String,
    pub remote_port: Port,
    #[serde(deserialize_with = "null_as_default")]
    pub connections: Vec<SqlServerConnection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SshTarget {
    #[serde(flatten)]
    pub target: Target,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_target_users: Vec<TargetUser>,
    #[serde(deserialize_with = "null_as_default")]
    pub connections: Vec<SshConnection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebTarget {
    #[serde(flatten)]
    pub target: Target,
    pub proxy_agent_id: String,
    pub proxy_agent_name: String,
    pub remote_host: String,
    pub remote_port: Port,
    pub local_host: String,
    pub local_port: Option<Port>,
    #[serde(deserialize_with = "null_as_default")]
    pub connections: Vec<WebConnection>,
}

impl_target_interface!(
    DatabaseTarget,
    KubeTarget,
    FileTransferTarget,
    RdpTarget,
    ShellTarget,
    SqlServerTarget,
    SshTarget,
    WebTarget,
);

/// Query for the all-targets endpoint.
///
/// `allTargetsInOrg` and `userEmail` are always sent, even when false/empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAllTargetsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_states: Option<ConnectionState>,
    pub all_targets_in_org: bool,
    pub user_email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AllTargetsResponse {
    #[serde(alias = "Db", deserialize_with = "null_as_default")]
    pub db: Vec<DatabaseTarget>,
    #[serde(alias = "Kubernetes", deserialize_with = "null_as_default")]
    pub kubernetes: Vec<KubeTarget>,
    #[serde(alias = "FileTransfer", deserialize_with = "null_as_default")]
    pub file_transfer: Vec<FileTransferTarget>,
    #[serde(alias = "Rdp", deserialize_with = "null_as_default")]
    pub rdp: Vec<RdpTarget>,
    #[serde(alias = "Shell", deserialize_with = "null_as_default")]
    pub shell: Vec<ShellTarget>,
    #[serde(alias = "Ssh", deserialize_with = "null_as_default")]
    pub ssh: Vec<SshTarget>,
    #[serde(alias = "SqlServer", deserialize_with = "null_as_default")]
    pub sql_server: Vec<SqlServerTarget>,
    #[serde(alias = "Web", deserialize_with = "null_as_default")]
    pub web: Vec<WebTarget>,
}

impl AllTargetsResponse {
    /// Total number of targets across every kind
    pub fn len(&self) -> usize {
        self.db.len()
            + self.kubernetes.len()
            + self.file_transfer.len()
            + self.rdp.len()
            + self.shell.len()
            + self.ssh.len()
            + self.sql_server.len()
            + self.web.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
