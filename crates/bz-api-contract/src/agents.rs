// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Agent shapes for `api/v2/agents`

use serde::{Deserialize, Serialize};

use crate::macros::api_enum;
use crate::timestamp::Timestamp;

api_enum! {
    pub enum AgentType {
        Cluster => "Cluster",
        Linux => "Linux",
        Windows => "Windows",
    }
}

api_enum! {
    pub enum AgentStatus {
        NotActivated => "NotActivated",
        Offline => "Offline",
        Online => "Online",
        Terminated => "Terminated",
        Error => "Error",
        Restarting => "Restarting",
    }
}

/// Control channel an agent currently holds with a connection node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControlChannelSummary {
    pub control_channel_id: String,
    pub connection_node_id: String,
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
}

/// Full agent record returned by the agent list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentDetails {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    #[serde(rename = "status")]
    pub agent_status: AgentStatus,
    pub last_status_update: Timestamp,
    pub version: String,
    pub region: String,
    pub public_key: String,
    pub control_channel: Option<ControlChannelSummary>,
    pub environment_id: String,
    pub environment_name: String,
}

/// Agent block embedded in target records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    pub status: AgentStatus,
    pub version: String,
    pub region: String,
    pub public_key: String,
    pub last_status_update: Option<Timestamp>,
    pub control_channel: Option<ControlChannelSummary>,
}

/// Query filters for the agent list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAgentsOptions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub agent_types: Vec<AgentType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub agent_statuses: Vec<AgentStatus>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub environment_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}
