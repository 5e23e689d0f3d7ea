// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bz_api_contract::connections::{
    CreateConnectionResponse, CreateDbConnectionRequest, CreateKubeConnectionRequest,
    CreateShellConnectionRequest, CreateSshConnectionRequest, CreateUniversalConnectionRequest,
    CreateUniversalConnectionResponse, CreateUniversalSshConnectionRequest,
    CreateWebConnectionRequest, DbConnection, DynamicAccessConnection, KubeConnection,
    ListConnectionOptions, RdpConnection, ShellConnection, SqlServerConnection,
};

use crate::error::RestClientResult;
use crate::query::add_options;

const CONNECTIONS_BASE_PATH: &str = "api/v2/connections";

service_handle! {
    /// Connections under `api/v2/connections`
    ConnectionsService
}

impl ConnectionsService<'_> {
    pub async fn create_shell_connection(
        &self,
        request: &CreateShellConnectionRequest,
    ) -> RestClientResult<CreateConnectionResponse> {
        self.client.post(&format!("{CONNECTIONS_BASE_PATH}/shell"), request).await
    }

    pub async fn get_shell_connection(&self, id: &str) -> RestClientResult<ShellConnection> {
        self.client.get(&format!("{CONNECTIONS_BASE_PATH}/shell/{id}")).await
    }

    pub async fn create_ssh_connection(
        &self,
        request: &CreateSshConnectionRequest,
    ) -> RestClientResult<CreateConnectionResponse> {
        self.client.post(&format!("{CONNECTIONS_BASE_PATH}/ssh"), request).await
    }

    pub async fn create_db_connection(
        &self,
        request: &CreateDbConnectionRequest,
    ) -> RestClientResult<CreateConnectionResponse> {
        self.client.post(&format!("{CONNECTIONS_BASE_PATH}/db"), request).await
    }

    pub async fn list_db_connections(
        &self,
        opts: Option<&ListConnectionOptions>,
    ) -> RestClientResult<Vec<DbConnection>> {
        let path = add_options(&format!("{CONNECTIONS_BASE_PATH}/db"), opts)?;
        self.client.get(&path).await
    }

    pub async fn create_kube_connection(
        &self,
        request: &CreateKubeConnectionRequest,
    ) -> RestClientResult<CreateConnectionResponse> {
        self.client.post(&format!("{CONNECTIONS_BASE_PATH}/kube"), request).await
    }

    pub async fn list_kube_connections(
        &self,
        opts: Option<&ListConnectionOptions>,
    ) -> RestClientResult<Vec<KubeConnection>> {
        let path = add_options(&format!("{CONNECTIONS_BASE_PATH}/kube"), opts)?;
        self.client.get(&path).await
    }

    pub async fn list_rdp_connections(
        &self,
        opts: Option<&ListConnectionOptions>,
    ) -> RestClientResult<Vec<RdpConnection>> {
        let path = add_options(&format!("{CONNECTIONS_BASE_PATH}/rdp"), opts)?;
        self.client.get(&path).await
    }

    pub async fn list_sql_server_connections(
        &self,
        opts: Option<&ListConnectionOptions>,
    ) -> RestClientResult<Vec<SqlServerConnection>> {
        let path = add_options(&format!("{CONNECTIONS_BASE_PATH}/sqlserver"), opts)?;
        self.client.get(&path).await
    }

    pub async fn create_web_connection(
        &self,
        request: &CreateWebConnectionRequest,
    ) -> RestClientResult<CreateConnectionResponse> {
        self.client.post(&format!("{CONNECTIONS_BASE_PATH}/web"), request).await
    }

    pub async fn get_dynamic_access_connection(
        &self,
        id: &str,
    ) -> RestClientResult<DynamicAccessConnection> {
        self.client.get(&format!("{CONNECTIONS_BASE_PATH}/dynamic-access/{id}")).await
    }

    /// Create a connection to any target kind, resolved server-side
    pub async fn create_universal_connection(
        &self,
        request: &CreateUniversalConnectionRequest,
    ) -> RestClientResult<CreateUniversalConnectionResponse> {
        self.client.post(&format!("{CONNECTIONS_BASE_PATH}/universal"), request).await
    }

    pub async fn create_universal_ssh_connection(
        &self,
        request: &CreateUniversalSshConnectionRequest,
    ) -> RestClientResult<CreateUniversalConnectionResponse> {
        self.client.post(&format!("{CONNECTIONS_BASE_PATH}/universal/ssh"), request).await
    }

    pub async fn close_connection(&self, id: &str) -> RestClientResult<()> {
        self.client.patch_empty(&format!("{CONNECTIONS_BASE_PATH}/{id}/close")).await
    }
}
