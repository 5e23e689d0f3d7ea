// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bz_api_contract::events::{
    AgentStatusChangeEvent, AgentStatusChangeEventOptions, CommandEvent, CommandEventOptions,
    ConnectionEvent, ConnectionEventOptions, KubernetesEvent, SubjectEvent, SubjectEventOptions,
};
use bz_api_contract::validation::validate_agent_status_change_options;

use crate::error::{RestClientError, RestClientResult};
use crate::query::add_options;

const EVENTS_BASE_PATH: &str = "api/v2/events";

service_handle! {
    /// Audit events under `api/v2/events`
    EventsService
}

impl EventsService<'_> {
    /// API calls made by subjects
    pub async fn list_subject_events(
        &self,
        opts: Option<&SubjectEventOptions>,
    ) -> RestClientResult<Vec<SubjectEvent>> {
        let path = add_options(&format!("{EVENTS_BASE_PATH}/subject"), opts)?;
        self.client.get(&path).await
    }

    pub async fn list_connection_events(
        &self,
        opts: Option<&ConnectionEventOptions>,
    ) -> RestClientResult<Vec<ConnectionEvent>> {
        let path = add_options(&format!("{EVENTS_BASE_PATH}/connection"), opts)?;
        self.client.get(&path).await
    }

    /// Shell commands typed during recorded connections
    pub async fn list_command_events(
        &self,
        opts: Option<&CommandEventOptions>,
    ) -> RestClientResult<Vec<CommandEvent>> {
        let path = add_options(&format!("{EVENTS_BASE_PATH}/command"), opts)?;
        self.client.get(&path).await
    }

    pub async fn list_kubernetes_events(&self) -> RestClientResult<Vec<KubernetesEvent>> {
        self.client.get(&format!("{EVENTS_BASE_PATH}/kube")).await
    }

    /// Status transitions of one target's agent. Fails locally when no target id is given.
    pub async fn list_agent_status_change_events(
        &self,
        opts: Option<&AgentStatusChangeEventOptions>,
    ) -> RestClientResult<Vec<AgentStatusChangeEvent>> {
        let opts = opts.ok_or_else(|| RestClientError::InvalidArgument("opts is required".to_string()))?;
        validate_agent_status_change_options(opts)
            .map_err(|_| RestClientError::InvalidArgument("opts: TargetID is required".to_string()))?;

        let path = add_options(&format!("{EVENTS_BASE_PATH}/agent-status-change"), Some(opts))?;
        self.client.get(&path).await
    }
}
