// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bz_api_contract::service_accounts::{
    CreateServiceAccountRequest, CreateServiceAccountResponse, ModifyServiceAccountRequest,
    ServiceAccount,
};

use crate::error::RestClientResult;

const SERVICE_ACCOUNTS_BASE_PATH: &str = "api/v2/service-accounts";

service_handle! {
    /// Service accounts under `api/v2/service-accounts`
    ServiceAccountsService
}

impl ServiceAccountsService<'_> {
    pub async fn list_service_accounts(&self) -> RestClientResult<Vec<ServiceAccount>> {
        self.client.get(SERVICE_ACCOUNTS_BASE_PATH).await
    }

    pub async fn create_service_account(
        &self,
        request: &CreateServiceAccountRequest,
    ) -> RestClientResult<CreateServiceAccountResponse> {
        self.client.post(SERVICE_ACCOUNTS_BASE_PATH, request).await
    }

    pub async fn get_service_account(&self, id: &str) -> RestClientResult<ServiceAccount> {
        self.client.get(&format!("{SERVICE_ACCOUNTS_BASE_PATH}/{id}")).await
    }

    pub async fn modify_service_account(
        &self,
        id: &str,
        request: &ModifyServiceAccountRequest,
    ) -> RestClientResult<ServiceAccount> {
        self.client.patch(&format!("{SERVICE_ACCOUNTS_BASE_PATH}/{id}"), request).await
    }

    /// The service account the client is authenticated as
    pub async fn me(&self) -> RestClientResult<ServiceAccount> {
        self.client.get(&format!("{SERVICE_ACCOUNTS_BASE_PATH}/me")).await
    }

    /// Make the server refetch the account's JWKS on next use
    pub async fn invalidate_jwks_url_cache(&self, id: &str) -> RestClientResult<()> {
        self.client
            .patch_empty(&format!("{SERVICE_ACCOUNTS_BASE_PATH}/invalidate-cache/{id}"))
            .await
    }
}
