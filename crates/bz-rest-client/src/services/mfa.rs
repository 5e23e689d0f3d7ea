// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bz_api_contract::mfa::{
    ClearMfaSecretRequest, DisableMfaRequest, EnableMfaRequest, MfaStatus, ResetMfaSecretRequest,
    ResetMfaSecretResponse,
};

use crate::error::RestClientResult;

const MFA_BASE_PATH: &str = "api/v2/mfa";

service_handle! {
    /// Multi-factor authentication under `api/v2/mfa`
    MfaService
}

impl MfaService<'_> {
    /// Reset the caller's MFA secret and return the enrollment URL
    pub async fn reset_mfa_secret(
        &self,
        request: &ResetMfaSecretRequest,
    ) -> RestClientResult<ResetMfaSecretResponse> {
        self.client.post(&format!("{MFA_BASE_PATH}/reset"), request).await
    }

    /// Rotate a service account's MFA secret. Returns the new secret, base32-encoded.
    pub async fn rotate_service_account_mfa_secret(&self, id: &str) -> RestClientResult<String> {
        self.client
            .request(reqwest::Method::PATCH, &format!("{MFA_BASE_PATH}/rotate/{id}"), None::<&()>)
            .await
    }

    pub async fn clear_mfa_secret(&self, request: &ClearMfaSecretRequest) -> RestClientResult<()> {
        self.client.post_unit(&format!("{MFA_BASE_PATH}/clear"), request).await
    }

    pub async fn enable_mfa(&self, request: &EnableMfaRequest) -> RestClientResult<()> {
        self.client.post_unit(&format!("{MFA_BASE_PATH}/setup"), request).await
    }

    pub async fn disable_mfa(&self, request: &DisableMfaRequest) -> RestClientResult<()> {
        self.client.post_unit(&format!("{MFA_BASE_PATH}/disable"), request).await
    }

    pub async fn get_user_mfa_status(&self, user_id: &str) -> RestClientResult<MfaStatus> {
        self.client.get(&format!("{MFA_BASE_PATH}/{user_id}")).await
    }

    pub async fn get_mfa_status(&self) -> RestClientResult<MfaStatus> {
        self.client.get(&format!("{MFA_BASE_PATH}/me")).await
    }
}
