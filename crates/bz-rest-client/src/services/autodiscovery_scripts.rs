// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bz_api_contract::autodiscovery::{BzeroBashAutodiscoveryOptions, BzeroBashAutodiscoveryScript};

use crate::error::RestClientResult;
use crate::query::add_options;

const AUTODISCOVERY_SCRIPTS_BASE_PATH: &str = "api/v2/autodiscovery-scripts";

service_handle! {
    /// Agent installation scripts
    AutodiscoveryScriptsService
}

impl AutodiscoveryScriptsService<'_> {
    /// Bash script that installs and registers a bzero agent
    pub async fn get_bzero_bash_autodiscovery_script(
        &self,
        opts: &BzeroBashAutodiscoveryOptions,
    ) -> RestClientResult<BzeroBashAutodiscoveryScript> {
        let path = add_options(&format!("{AUTODISCOVERY_SCRIPTS_BASE_PATH}/bzero/bash"), Some(opts))?;
        self.client.get(&path).await
    }

    /// Bash script for container-based agents, returned as plain text
    pub async fn get_container_bash_autodiscovery_script(&self) -> RestClientResult<String> {
        self.client
            .request_text(&format!("{AUTODISCOVERY_SCRIPTS_BASE_PATH}/container"))
            .await
    }
}
