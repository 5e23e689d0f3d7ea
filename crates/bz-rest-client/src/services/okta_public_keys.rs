// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bz_api_contract::okta::ListOktaPublicKeysResponse;

use crate::error::RestClientResult;

const OKTA_PUBLIC_KEYS_BASE_PATH: &str = "api/v2/okta-public-keys";

service_handle! {
    /// Keys used to verify Okta-issued tokens
    OktaPublicKeysService
}

impl OktaPublicKeysService<'_> {
    pub async fn list_okta_public_keys(&self) -> RestClientResult<ListOktaPublicKeysResponse> {
        self.client.get(OKTA_PUBLIC_KEYS_BASE_PATH).await
    }
}
