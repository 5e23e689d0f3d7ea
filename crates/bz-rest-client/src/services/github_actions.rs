// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bz_api_contract::github_actions::{AuthorizedGitHubAction, CreateAuthorizedGitHubActionRequest};

use crate::error::RestClientResult;

const GITHUB_ACTIONS_BASE_PATH: &str = "api/v2/github-actions";

service_handle! {
    /// GitHub Actions allowed to authenticate as service accounts
    GitHubActionsService
}

impl GitHubActionsService<'_> {
    pub async fn list_authorized_github_actions(&self) -> RestClientResult<Vec<AuthorizedGitHubAction>> {
        self.client.get(GITHUB_ACTIONS_BASE_PATH).await
    }

    pub async fn create_authorized_github_action(
        &self,
        request: &CreateAuthorizedGitHubActionRequest,
    ) -> RestClientResult<AuthorizedGitHubAction> {
        self.client.post(GITHUB_ACTIONS_BASE_PATH, request).await
    }

    pub async fn get_authorized_github_action(&self, id: &str) -> RestClientResult<AuthorizedGitHubAction> {
        self.client.get(&format!("{GITHUB_ACTIONS_BASE_PATH}/{id}")).await
    }

    pub async fn delete_authorized_github_action(&self, id: &str) -> RestClientResult<()> {
        self.client.delete(&format!("{GITHUB_ACTIONS_BASE_PATH}/{id}")).await
    }
}
