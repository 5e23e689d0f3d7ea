// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bz_api_contract::api_keys::{
    ApiKey, CreateGlobalApiKeyRequest, CreateGlobalApiKeyResponse, ModifyApiKeyRequest,
};

use crate::error::RestClientResult;

const API_KEYS_BASE_PATH: &str = "api/v2/api-keys";

service_handle! {
    /// Organization-wide API keys under `api/v2/api-keys`
    ApiKeysService
}

impl ApiKeysService<'_> {
    pub async fn list_global_api_keys(&self) -> RestClientResult<Vec<ApiKey>> {
        self.client.get(API_KEYS_BASE_PATH).await
    }

    pub async fn create_global_api_key(
        &self,
        request: &CreateGlobalApiKeyRequest,
    ) -> RestClientResult<CreateGlobalApiKeyResponse> {
        self.client.post(API_KEYS_BASE_PATH, request).await
    }

    pub async fn get_api_key(&self, id: &str) -> RestClientResult<ApiKey> {
        self.client.get(&format!("{API_KEYS_BASE_PATH}/{id}")).await
    }

    pub async fn delete_api_key(&self, id: &str) -> RestClientResult<()> {
        self.client.delete(&format!("{API_KEYS_BASE_PATH}/{id}")).await
    }

    pub async fn modify_api_key(
        &self,
        id: &str,
        request: &ModifyApiKeyRequest,
    ) -> RestClientResult<ApiKey> {
        self.client.patch(&format!("{API_KEYS_BASE_PATH}/{id}"), request).await
    }
}
