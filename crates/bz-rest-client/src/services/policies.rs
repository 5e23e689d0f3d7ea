// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bz_api_contract::policies::{
    JitPolicy, KubernetesPolicy, ListPolicyOptions, OrganizationControlsPolicy, ProxyPolicy,
    SessionRecordingPolicy, TargetConnectPolicy,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::RestClientResult;
use crate::query::add_options;

const POLICIES_BASE_PATH: &str = "api/v2/policies";

const TARGET_CONNECT: &str = "target-connect";
const KUBERNETES: &str = "kubernetes";
const PROXY: &str = "proxy";
const JUST_IN_TIME: &str = "just-in-time";
const SESSION_RECORDING: &str = "session-recording";
const ORGANIZATION_CONTROLS: &str = "organization-controls";

service_handle! {
    /// Policies under `api/v2/policies`, one sub-path per policy kind
    PoliciesService
}

impl PoliciesService<'_> {
    async fn list<P>(&self, kind: &str, opts: Option<&ListPolicyOptions>) -> RestClientResult<Vec<P>>
    where
        P: DeserializeOwned,
    {
        let path = add_options(&format!("{POLICIES_BASE_PATH}/{kind}"), opts)?;
        self.client.get(&path).await
    }

    async fn create<P>(&self, kind: &str, policy: &P) -> RestClientResult<P>
    where
        P: Serialize + DeserializeOwned + Default,
    {
        self.client.post(&format!("{POLICIES_BASE_PATH}/{kind}"), policy).await
    }

    async fn get_one<P>(&self, kind: &str, id: &str) -> RestClientResult<P>
    where
        P: DeserializeOwned + Default,
    {
        self.client.get(&format!("{POLICIES_BASE_PATH}/{kind}/{id}")).await
    }

    async fn delete_one(&self, kind: &str, id: &str) -> RestClientResult<()> {
        self.client.delete(&format!("{POLICIES_BASE_PATH}/{kind}/{id}")).await
    }

    async fn modify<P>(&self, kind: &str, id: &str, policy: &P) -> RestClientResult<P>
    where
        P: Serialize + DeserializeOwned + Default,
    {
        self.client.patch(&format!("{POLICIES_BASE_PATH}/{kind}/{id}"), policy).await
    }

    pub async fn list_target_connect_policies(
        &self,
        opts: Option<&ListPolicyOptions>,
    ) -> RestClientResult<Vec<TargetConnectPolicy>> {
        self.list(TARGET_CONNECT, opts).await
    }

    pub async fn create_target_connect_policy(
        &self,
        policy: &TargetConnectPolicy,
    ) -> RestClientResult<TargetConnectPolicy> {
        self.create(TARGET_CONNECT, policy).await
    }

    pub async fn get_target_connect_policy(&self, id: &str) -> RestClientResult<TargetConnectPolicy> {
        self.get_one(TARGET_CONNECT, id).await
    }

    pub async fn delete_target_connect_policy(&self, id: &str) -> RestClientResult<()> {
        self.delete_one(TARGET_CONNECT, id).await
    }

    /// Only the fields set on `policy` are changed
    pub async fn modify_target_connect_policy(
        &self,
        id: &str,
        policy: &TargetConnectPolicy,
    ) -> RestClientResult<TargetConnectPolicy> {
        self.modify(TARGET_CONNECT, id, policy).await
    }

    pub async fn list_kubernetes_policies(
        &self,
        opts: Option<&ListPolicyOptions>,
    ) -> RestClientResult<Vec<KubernetesPolicy>> {
        self.list(KUBERNETES, opts).await
    }

    pub async fn create_kubernetes_policy(
        &self,
        policy: &KubernetesPolicy,
    ) -> RestClientResult<KubernetesPolicy> {
        self.create(KUBERNETES, policy).await
    }

    pub async fn get_kubernetes_policy(&self, id: &str) -> RestClientResult<KubernetesPolicy> {
        self.get_one(KUBERNETES, id).await
    }

    pub async fn delete_kubernetes_policy(&self, id: &str) -> RestClientResult<()> {
        self.delete_one(KUBERNETES, id).await
    }

    pub async fn modify_kubernetes_policy(
        &self,
        id: &str,
        policy: &KubernetesPolicy,
    ) -> RestClientResult<KubernetesPolicy> {
        self.modify(KUBERNETES, id, policy).await
    }

    pub async fn list_proxy_policies(
        &self,
        opts: Option<&ListPolicyOptions>,
    ) -> RestClientResult<Vec<ProxyPolicy>> {
        self.list(PROXY, opts).await
    }

    pub async fn create_proxy_policy(&self, policy: &ProxyPolicy) -> RestClientResult<ProxyPolicy> {
        self.create(PROXY, policy).await
    }

    pub async fn get_proxy_policy(&self, id: &str) -> RestClientResult<ProxyPolicy> {
        self.get_one(PROXY, id).await
    }

    pub async fn delete_proxy_policy(&self, id: &str) -> RestClientResult<()> {
        self.delete_one(PROXY, id).await
    }

    pub async fn modify_proxy_policy(
        &self,
        id: &str,
        policy: &ProxyPolicy,
    ) -> RestClientResult<ProxyPolicy> {
        self.modify(PROXY, id, policy).await
    }

    pub async fn list_jit_policies(
        &self,
        opts: Option<&ListPolicyOptions>,
    ) -> RestClientResult<Vec<JitPolicy>> {
        self.list(JUST_IN_TIME, opts).await
    }

    pub async fn create_jit_policy(&self, policy: &JitPolicy) -> RestClientResult<JitPolicy> {
        self.create(JUST_IN_TIME, policy).await
    }

    pub async fn get_jit_policy(&self, id: &str) -> RestClientResult<JitPolicy> {
        self.get_one(JUST_IN_TIME, id).await
    }

    pub async fn delete_jit_policy(&self, id: &str) -> RestClientResult<()> {
        self.delete_one(JUST_IN_TIME, id).await
    }

    pub async fn modify_jit_policy(&self, id: &str, policy: &JitPolicy) -> RestClientResult<JitPolicy> {
        self.modify(JUST_IN_TIME, id, policy).await
    }

    pub async fn list_session_recording_policies(
        &self,
        opts: Option<&ListPolicyOptions>,
    ) -> RestClientResult<Vec<SessionRecordingPolicy>> {
        self.list(SESSION_RECORDING, opts).await
    }

    pub async fn create_session_recording_policy(
        &self,
        policy: &SessionRecordingPolicy,
    ) -> RestClientResult<SessionRecordingPolicy> {
        self.create(SESSION_RECORDING, policy).await
    }

    pub async fn get_session_recording_policy(
        &self,
        id: &str,
    ) -> RestClientResult<SessionRecordingPolicy> {
        self.get_one(SESSION_RECORDING, id).await
    }

    pub async fn delete_session_recording_policy(&self, id: &str) -> RestClientResult<()> {
        self.delete_one(SESSION_RECORDING, id).await
    }

    pub async fn modify_session_recording_policy(
        &self,
        id: &str,
        policy: &SessionRecordingPolicy,
    ) -> RestClientResult<SessionRecordingPolicy> {
        self.modify(SESSION_RECORDING, id, policy).await
    }

    pub async fn list_organization_controls_policies(
        &self,
        opts: Option<&ListPolicyOptions>,
    ) -> RestClientResult<Vec<OrganizationControlsPolicy>> {
        self.list(ORGANIZATION_CONTROLS, opts).await
    }

    pub async fn create_organization_controls_policy(
        &self,
        policy: &OrganizationControlsPolicy,
    ) -> RestClientResult<OrganizationControlsPolicy> {
        self.create(ORGANIZATION_CONTROLS, policy).await
    }

    pub async fn get_organization_controls_policy(
        &self,
        id: &str,
    ) -> RestClientResult<OrganizationControlsPolicy> {
        self.get_one(ORGANIZATION_CONTROLS, id).await
    }

    pub async fn delete_organization_controls_policy(&self, id: &str) -> RestClientResult<()> {
        self.delete_one(ORGANIZATION_CONTROLS, id).await
    }

    pub async fn modify_organization_controls_policy(
        &self,
        id: &str,
        policy: &OrganizationControlsPolicy,
    ) -> RestClientResult<OrganizationControlsPolicy> {
        self.modify(ORGANIZATION_CONTROLS, id, policy).await
    }
}
