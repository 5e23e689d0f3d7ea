// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bz_api_contract::all_targets::{AllTargetsResponse, ListAllTargetsOptions};
use bz_api_contract::targets::{
    BzeroTarget, ClusterTarget, CreateDatabaseTargetRequest, CreateDatabaseTargetResponse,
    CreateDynamicAccessConfigurationRequest, CreateDynamicAccessResponse,
    DatabaseAuthenticationConfig, DatabaseTarget, DynamicAccessConfiguration,
    ListDatabaseTargetsOptions, ListSplitCertDatabaseTypesResponse, ModifyDatabaseTargetRequest,
    ModifyDynamicAccessConfigurationRequest, WebTarget,
};

use crate::error::RestClientResult;
use crate::query::add_options;

const TARGETS_BASE_PATH: &str = "api/v2/targets";
const BZERO_PATH: &str = "api/v2/targets/bzero";
const KUBE_PATH: &str = "api/v2/targets/kube";
const WEB_PATH: &str = "api/v2/targets/web";
const DATABASE_PATH: &str = "api/v2/targets/database";
const DYNAMIC_ACCESS_PATH: &str = "api/v2/targets/dynamic-access";

service_handle! {
    /// Targets under `api/v2/targets`
    TargetsService
}

impl TargetsService<'_> {
    pub async fn list_bzero_targets(&self) -> RestClientResult<Vec<BzeroTarget>> {
        self.client.get(BZERO_PATH).await
    }

    pub async fn get_bzero_target(&self, id: &str) -> RestClientResult<BzeroTarget> {
        self.client.get(&format!("{BZERO_PATH}/{id}")).await
    }

    pub async fn list_cluster_targets(&self) -> RestClientResult<Vec<ClusterTarget>> {
        self.client.get(KUBE_PATH).await
    }

    pub async fn get_cluster_target(&self, id: &str) -> RestClientResult<ClusterTarget> {
        self.client.get(&format!("{KUBE_PATH}/{id}")).await
    }

    pub async fn list_web_targets(&self) -> RestClientResult<Vec<WebTarget>> {
        self.client.get(WEB_PATH).await
    }

    pub async fn get_web_target(&self, id: &str) -> RestClientResult<WebTarget> {
        self.client.get(&format!("{WEB_PATH}/{id}")).await
    }

    pub async fn list_database_targets(&self) -> RestClientResult<Vec<DatabaseTarget>> {
        self.client.get(DATABASE_PATH).await
    }

    /// List database targets matching names, ids or environment
    pub async fn list_database_targets_with_filter(
        &self,
        opts: Option<&ListDatabaseTargetsOptions>,
    ) -> RestClientResult<Vec<DatabaseTarget>> {
        let path = add_options(DATABASE_PATH, opts)?;
        self.client.get(&path).await
    }

    pub async fn create_database_target(
        &self,
        request: &CreateDatabaseTargetRequest,
    ) -> RestClientResult<CreateDatabaseTargetResponse> {
        self.client.post(DATABASE_PATH, request).await
    }

    pub async fn get_database_target(&self, id: &str) -> RestClientResult<DatabaseTarget> {
        self.client.get(&format!("{DATABASE_PATH}/{id}")).await
    }

    pub async fn delete_database_target(&self, id: &str) -> RestClientResult<()> {
        self.client.delete(&format!("{DATABASE_PATH}/{id}")).await
    }

    pub async fn modify_database_target(
        &self,
        id: &str,
        request: &ModifyDatabaseTargetRequest,
    ) -> RestClientResult<DatabaseTarget> {
        self.client.patch(&format!("{DATABASE_PATH}/{id}"), request).await
    }

    /// Database types that support split-cert authentication
    pub async fn list_split_cert_database_types(
        &self,
    ) -> RestClientResult<ListSplitCertDatabaseTypesResponse> {
        self.client.get(&format!("{DATABASE_PATH}/supported-databases")).await
    }

    pub async fn list_database_authentication_configs(
        &self,
    ) -> RestClientResult<Vec<DatabaseAuthenticationConfig>> {
        self.client.get(&format!("{DATABASE_PATH}/supported-database-configs")).await
    }

    pub async fn list_dynamic_access_configurations(
        &self,
    ) -> RestClientResult<Vec<DynamicAccessConfiguration>> {
        self.client.get(DYNAMIC_ACCESS_PATH).await
    }

    pub async fn create_dynamic_access_configuration(
        &self,
        request: &CreateDynamicAccessConfigurationRequest,
    ) -> RestClientResult<CreateDynamicAccessResponse> {
        self.client.post(DYNAMIC_ACCESS_PATH, request).await
    }

    pub async fn get_dynamic_access_configuration(
        &self,
        id: &str,
    ) -> RestClientResult<DynamicAccessConfiguration> {
        self.client.get(&format!("{DYNAMIC_ACCESS_PATH}/{id}")).await
    }

    pub async fn delete_dynamic_access_configuration(&self, id: &str) -> RestClientResult<()> {
        self.client.delete(&format!("{DYNAMIC_ACCESS_PATH}/{id}")).await
    }

    pub async fn modify_dynamic_access_configuration(
        &self,
        id: &str,
        request: &ModifyDynamicAccessConfigurationRequest,
    ) -> RestClientResult<()> {
        self.client.patch_unit(&format!("{DYNAMIC_ACCESS_PATH}/{id}"), request).await
    }

    /// Every target the caller (or, with `all_targets_in_org`, anyone) can reach, grouped by access kind
    pub async fn list_all_targets(
        &self,
        opts: Option<&ListAllTargetsOptions>,
    ) -> RestClientResult<AllTargetsResponse> {
        let path = add_options(TARGETS_BASE_PATH, opts)?;
        self.client.get(&path).await
    }
}
