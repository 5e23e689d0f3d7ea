// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Authorized GitHub action shapes for `api/v2/github-actions`

use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAuthorizedGitHubActionRequest {
    /// `<owner>/<repo>` form as used in workflow files
    #[serde(rename = "githubActionId")]
    pub github_action_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizedGitHubAction {
    pub id: String,
    pub organization_id: String,
    pub time_created: Timestamp,
    pub created_by: String,
    #[serde(rename = "githubActionId")]
    pub github_action_id: String,
}
