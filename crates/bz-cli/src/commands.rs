// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Subcommands. Each one performs a single API call and yields its JSON result.

use bz_rest_client::RestClient;
use bz_rest_client::types::events::SubjectEventOptions;
use clap::{Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the authenticated user
    Me,
    Targets {
        #[command(subcommand)]
        subcommand: TargetCommands,
    },
    Policies {
        #[command(subcommand)]
        subcommand: PolicyCommands,
    },
    Environments {
        #[command(subcommand)]
        subcommand: EnvironmentCommands,
    },
    Events {
        #[command(subcommand)]
        subcommand: EventCommands,
    },
    Connections {
        #[command(subcommand)]
        subcommand: ConnectionCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum TargetCommands {
    List {
        #[arg(long, value_enum, default_value_t = TargetKind::All)]
        kind: TargetKind,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TargetKind {
    Bzero,
    Kube,
    Web,
    Database,
    /// Dynamic access configurations
    Dac,
    /// Every target the caller can reach, grouped by access type
    All,
}

#[derive(Subcommand, Debug)]
pub enum PolicyCommands {
    List {
        #[arg(long, value_enum)]
        kind: PolicyKind,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    TargetConnect,
    Kubernetes,
    Proxy,
    Jit,
    SessionRecording,
    OrganizationControls,
}

#[derive(Subcommand, Debug)]
pub enum EnvironmentCommands {
    List,
}

#[derive(Subcommand, Debug)]
pub enum EventCommands {
    /// API calls made by users, service accounts and API keys
    Subject {
        /// Maximum number of events (server default when omitted)
        #[arg(long)]
        count: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConnectionCommands {
    Close { id: String },
}

fn to_json<T: Serialize>(value: T) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(value)?)
}

impl Commands {
    pub async fn execute(&self, client: &RestClient) -> anyhow::Result<Value> {
        match self {
            Commands::Me => to_json(client.users().me().await?),
            Commands::Targets {
                subcommand: TargetCommands::List { kind },
            } => list_targets(client, *kind).await,
            Commands::Policies {
                subcommand: PolicyCommands::List { kind },
            } => list_policies(client, *kind).await,
            Commands::Environments {
                subcommand: EnvironmentCommands::List,
            } => to_json(client.environments().list_environments().await?),
            Commands::Events {
                subcommand: EventCommands::Subject { count },
            } => {
                let opts = SubjectEventOptions {
                    event_count: count.unwrap_or_default(),
                    ..Default::default()
                };
                to_json(client.events().list_subject_events(Some(&opts)).await?)
            }
            Commands::Connections {
                subcommand: ConnectionCommands::Close { id },
            } => {
                client.connections().close_connection(id).await?;
                info!(connection_id = %id, "connection closed");
                Ok(json!({"id": id, "closed": true}))
            }
        }
    }
}

async fn list_targets(client: &RestClient, kind: TargetKind) -> anyhow::Result<Value> {
    let targets = client.targets();
    match kind {
        TargetKind::Bzero => to_json(targets.list_bzero_targets().await?),
        TargetKind::Kube => to_json(targets.list_cluster_targets().await?),
        TargetKind::Web => to_json(targets.list_web_targets().await?),
        TargetKind::Database => to_json(targets.list_database_targets().await?),
        TargetKind::Dac => to_json(targets.list_dynamic_access_configurations().await?),
        TargetKind::All => to_json(targets.list_all_targets(None).await?),
    }
}

async fn list_policies(client: &RestClient, kind: PolicyKind) -> anyhow::Result<Value> {
    let policies = client.policies();
    match kind {
        PolicyKind::TargetConnect => to_json(policies.list_target_connect_policies(None).await?),
        PolicyKind::Kubernetes => to_json(policies.list_kubernetes_policies(None).await?),
        PolicyKind::Proxy => to_json(policies.list_proxy_policies(None).await?),
        PolicyKind::Jit => to_json(policies.list_jit_policies(None).await?),
        PolicyKind::SessionRecording => {
            to_json(policies.list_session_recording_policies(None).await?)
        }
        PolicyKind::OrganizationControls => {
            to_json(policies.list_organization_controls_policies(None).await?)
        }
    }
}
