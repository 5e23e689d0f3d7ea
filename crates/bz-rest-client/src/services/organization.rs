// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bz_api_contract::organization::{
    BzCertValidationInfo, EnableGlobalRegistrationKeyRequest, Group, IdentityProvider, Organization,
    RegistrationKeySettings, SlackIntegration,
};

use crate::error::RestClientResult;

const ORGANIZATION_BASE_PATH: &str = "api/v2/organization";
const GROUPS_PATH: &str = "api/v2/organization/groups";
const REGISTRATION_KEY_PATH: &str = "api/v2/organization/registration-key";

service_handle! {
    /// Organization settings under `api/v2/organization`
    OrganizationService
}

impl OrganizationService<'_> {
    pub async fn get_organization(&self) -> RestClientResult<Organization> {
        self.client.get(ORGANIZATION_BASE_PATH).await
    }

    pub async fn get_bzcert_validation_info(&self) -> RestClientResult<BzCertValidationInfo> {
        self.client.get(&format!("{ORGANIZATION_BASE_PATH}/bzcert-validation-info")).await
    }

    /// Groups last synced from the identity provider
    pub async fn list_groups(&self) -> RestClientResult<Vec<Group>> {
        self.client.get(GROUPS_PATH).await
    }

    /// Sync groups from the identity provider and return them
    pub async fn fetch_groups(&self) -> RestClientResult<Vec<Group>> {
        self.client
            .request(reqwest::Method::POST, &format!("{GROUPS_PATH}/fetch"), None::<&()>)
            .await
    }

    /// Sync one user's group memberships and return them
    pub async fn fetch_user_groups(&self, user_id: &str) -> RestClientResult<Vec<Group>> {
        self.client
            .request(
                reqwest::Method::POST,
                &format!("{ORGANIZATION_BASE_PATH}/groups-memberships/fetch/{user_id}"),
                None::<&()>,
            )
            .await
    }

    pub async fn delete_idp_group_credentials(&self) -> RestClientResult<()> {
        self.client.delete(&format!("{GROUPS_PATH}/credentials")).await
    }

    pub async fn invalidate_keycloak_provider_cache(&self) -> RestClientResult<()> {
        self.client.post_empty(&format!("{ORGANIZATION_BASE_PATH}/invalidate-keycloak")).await
    }

    pub async fn get_slack_integration(&self) -> RestClientResult<SlackIntegration> {
        self.client.get(&format!("{ORGANIZATION_BASE_PATH}/integrations/slack")).await
    }

    pub async fn get_registration_key_settings(&self) -> RestClientResult<RegistrationKeySettings> {
        self.client.get(&format!("{REGISTRATION_KEY_PATH}/settings")).await
    }

    /// Require every new agent to register with the given key
    pub async fn enable_global_registration_key(
        &self,
        request: &EnableGlobalRegistrationKeyRequest,
    ) -> RestClientResult<RegistrationKeySettings> {
        self.client
            .post(&format!("{REGISTRATION_KEY_PATH}/enable-enforce-global-key"), request)
            .await
    }

    pub async fn disable_global_registration_key(&self) -> RestClientResult<RegistrationKeySettings> {
        self.client
            .request(
                reqwest::Method::POST,
                &format!("{REGISTRATION_KEY_PATH}/disable-enforce-global-key"),
                None::<&()>,
            )
            .await
    }

    pub async fn get_identity_provider(&self) -> RestClientResult<IdentityProvider> {
        self.client.get(&format!("{ORGANIZATION_BASE_PATH}/identity-provider")).await
    }
}
