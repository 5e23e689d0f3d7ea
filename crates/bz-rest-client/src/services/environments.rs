// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bz_api_contract::environments::{
    CreateEnvironmentRequest, CreateEnvironmentResponse, Environment, ModifyEnvironmentRequest,
};

use crate::error::RestClientResult;

const ENVIRONMENTS_BASE_PATH: &str = "api/v2/environments";

service_handle! {
    /// Environments under `api/v2/environments`
    EnvironmentsService
}

impl EnvironmentsService<'_> {
    pub async fn list_environments(&self) -> RestClientResult<Vec<Environment>> {
        self.client.get(ENVIRONMENTS_BASE_PATH).await
    }

    pub async fn create_environment(
        &self,
        request: &CreateEnvironmentRequest,
    ) -> RestClientResult<CreateEnvironmentResponse> {
        self.client.post(ENVIRONMENTS_BASE_PATH, request).await
    }

    pub async fn get_environment(&self, id: &str) -> RestClientResult<Environment> {
        self.client.get(&format!("{ENVIRONMENTS_BASE_PATH}/{id}")).await
    }

    /// Deleting an environment also deletes the targets in it
    pub async fn delete_environment(&self, id: &str) -> RestClientResult<()> {
        self.client.delete(&format!("{ENVIRONMENTS_BASE_PATH}/{id}")).await
    }

    pub async fn modify_environment(
        &self,
        id: &str,
        request: &ModifyEnvironmentRequest,
    ) -> RestClientResult<()> {
        self.client.patch_unit(&format!("{ENVIRONMENTS_BASE_PATH}/{id}"), request).await
    }
}
