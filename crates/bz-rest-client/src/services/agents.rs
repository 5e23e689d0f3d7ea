// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bz_api_contract::agents::{AgentDetails, ListAgentsOptions};

use crate::error::RestClientResult;
use crate::query::add_options;

const AGENTS_BASE_PATH: &str = "api/v2/agents";

service_handle! {
    AgentsService
}

impl AgentsService<'_> {
    pub async fn list_agents(
        &self,
        opts: Option<&ListAgentsOptions>,
    ) -> RestClientResult<Vec<AgentDetails>> {
        let path = add_options(AGENTS_BASE_PATH, opts)?;
        self.client.get(&path).await
    }
}
