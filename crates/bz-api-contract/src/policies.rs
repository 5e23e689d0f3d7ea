// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Access policy shapes for `api/v2/policies`

use serde::{Deserialize, Serialize};

use crate::common::{SubjectType, TargetType};
use crate::macros::api_enum;
use crate::timestamp::Timestamp;

api_enum! {
    /// Policy kind
    pub enum PolicyType {
        TargetConnect => "TargetConnect",
        OrganizationControls => "OrganizationControls",
        SessionRecording => "SessionRecording",
        Kubernetes => "Kubernetes",
        Proxy => "Proxy",
        JustInTime => "JustInTime",
    }
}

api_enum! {
    /// Action a target connect policy allows
    pub enum VerbType {
        Shell => "Shell",
        FileTransfer => "FileTransfer",
        Tunnel => "Tunnel",
        Rdp => "RDP",
        SqlServer => "SQLServer",
    }
}

/// A subject a policy applies to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subject {
    pub id: String,
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
}

/// An identity-provider group a policy applies to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    pub id: String,
    pub name: String,
}

/// An environment a policy applies to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    pub id: String,
}

/// A target a policy applies to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Target {
    pub id: String,
    #[serde(rename = "type")]
    pub target_type: TargetType,
}

/// A Unix/Windows user a policy allows connecting as
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetUser {
    #[serde(rename = "userName")]
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Verb {
    #[serde(rename = "type")]
    pub verb_type: VerbType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cluster {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterUser {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterGroup {
    pub name: String,
}

/// A policy granted temporarily through a just-in-time policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildPolicy {
    pub id: String,
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    pub name: String,
}

/// Fields common to every policy kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Policy {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_expires: Option<Timestamp>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<Subject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Group>>,
}

/// Query filters accepted by every policy list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListPolicyOptions {
    /// Comma-separated subject ids or emails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<String>,
    /// Comma-separated group names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<String>,
}

impl ListPolicyOptions {
    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.subjects = join_csv(subjects);
        self
    }

    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.groups = join_csv(groups);
        self
    }
}

fn join_csv<I, S>(items: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = items.into_iter().map(|s| s.as_ref().to_string()).collect::<Vec<_>>().join(",");
    (!joined.is_empty()).then_some(joined)
}

/// Read access shared by all policy kinds
pub trait PolicyInterface {
    fn policy(&self) -> &Policy;
    fn policy_type(&self) -> PolicyType;

    fn id(&self) -> &str {
        &self.policy().id
    }

    fn name(&self) -> &str {
        &self.policy().name
    }

    fn description(&self) -> &str {
        self.policy().description.as_deref().unwrap_or_default()
    }

    fn time_expires(&self) -> Option<&Timestamp> {
        self.policy().time_expires.as_ref()
    }

    fn subjects(&self) -> &[Subject] {
        self.policy().subjects.as_deref().unwrap_or_default()
    }

    fn groups(&self) -> &[Group] {
        self.policy().groups.as_deref().unwrap_or_default()
    }
}

macro_rules! impl_policy_interface {
    ($ty:ty, $kind:expr) => {
        impl PolicyInterface for $ty {
            fn policy(&self) -> &Policy {
                &self.policy
            }

            fn policy_type(&self) -> PolicyType {
                $kind
            }
        }
    };
}

/// Grants shell, file transfer, tunnel, RDP and SQL Server access to targets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TargetConnectPolicy {
    #[serde(flatten)]
    pub policy: Policy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environments: Option<Vec<Environment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_users: Option<Vec<TargetUser>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbs: Option<Vec<Verb>>,
}

impl_policy_interface!(TargetConnectPolicy, PolicyType::TargetConnect);

impl TargetConnectPolicy {
    pub fn environments(&self) -> &[Environment] {
        self.environments.as_deref().unwrap_or_default()
    }

    pub fn targets(&self) -> &[Target] {
        self.targets.as_deref().unwrap_or_default()
    }

    pub fn target_users(&self) -> &[TargetUser] {
        self.target_users.as_deref().unwrap_or_default()
    }

    pub fn verbs(&self) -> &[Verb] {
        self.verbs.as_deref().unwrap_or_default()
    }

    pub fn environment_ids(&self) -> Vec<String> {
        self.environments().iter().map(|e| e.id.clone()).collect()
    }

    pub fn target_user_names(&self) -> Vec<String> {
        self.target_users().iter().map(|u| u.username.clone()).collect()
    }

    pub fn verb_names(&self) -> Vec<String> {
        self.verbs().iter().map(|v| v.verb_type.to_string()).collect()
    }
}

/// Grants access to Kubernetes clusters as given users and groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KubernetesPolicy {
    #[serde(flatten)]
    pub policy: Policy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environments: Option<Vec<Environment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clusters: Option<Vec<Cluster>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_users: Option<Vec<ClusterUser>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_groups: Option<Vec<ClusterGroup>>,
}

impl_policy_interface!(KubernetesPolicy, PolicyType::Kubernetes);

impl KubernetesPolicy {
    pub fn environments(&self) -> &[Environment] {
        self.environments.as_deref().unwrap_or_default()
    }

    pub fn clusters(&self) -> &[Cluster] {
        self.clusters.as_deref().unwrap_or_default()
    }

    pub fn cluster_users(&self) -> &[ClusterUser] {
        self.cluster_users.as_deref().unwrap_or_default()
    }

    pub fn cluster_groups(&self) -> &[ClusterGroup] {
        self.cluster_groups.as_deref().unwrap_or_default()
    }

    pub fn cluster_ids(&self) -> Vec<String> {
        self.clusters().iter().map(|c| c.id.clone()).collect()
    }

    pub fn cluster_user_names(&self) -> Vec<String> {
        self.cluster_users().iter().map(|u| u.name.clone()).collect()
    }

    pub fn cluster_group_names(&self) -> Vec<String> {
        self.cluster_groups().iter().map(|g| g.name.clone()).collect()
    }
}

/// Grants database and web proxy access
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyPolicy {
    #[serde(flatten)]
    pub policy: Policy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environments: Option<Vec<Environment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_users: Option<Vec<TargetUser>>,
}

impl_policy_interface!(ProxyPolicy, PolicyType::Proxy);

impl ProxyPolicy {
    pub fn environments(&self) -> &[Environment] {
        self.environments.as_deref().unwrap_or_default()
    }

    pub fn targets(&self) -> &[Target] {
        self.targets.as_deref().unwrap_or_default()
    }

    pub fn target_users(&self) -> &[TargetUser] {
        self.target_users.as_deref().unwrap_or_default()
    }
}

/// Grants its child policies on request, for a limited duration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JitPolicy {
    #[serde(flatten)]
    pub policy: Policy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_policies: Option<Vec<ChildPolicy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatically_approved: Option<bool>,
    /// Minutes the child policies stay in effect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl_policy_interface!(JitPolicy, PolicyType::JustInTime);

impl JitPolicy {
    pub fn child_policies(&self) -> &[ChildPolicy] {
        self.child_policies.as_deref().unwrap_or_default()
    }

    pub fn automatically_approved(&self) -> bool {
        self.automatically_approved.unwrap_or_default()
    }

    pub fn duration(&self) -> u32 {
        self.duration.unwrap_or_default()
    }
}

/// Controls whether shell sessions are recorded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionRecordingPolicy {
    #[serde(flatten)]
    pub policy: Policy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_input: Option<bool>,
}

impl_policy_interface!(SessionRecordingPolicy, PolicyType::SessionRecording);

impl SessionRecordingPolicy {
    pub fn record_input(&self) -> bool {
        self.record_input.unwrap_or_default()
    }
}

/// Organization-wide MFA settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationControlsPolicy {
    #[serde(flatten)]
    pub policy: Policy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_duration: Option<i32>,
}

impl_policy_interface!(OrganizationControlsPolicy, PolicyType::OrganizationControls);

impl OrganizationControlsPolicy {
    pub fn mfa_enabled(&self) -> bool {
        self.mfa_enabled.unwrap_or_default()
    }

    pub fn mfa_duration(&self) -> i32 {
        self.mfa_duration.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_target_connect_policy_decodes_flattened_base() {
        let policy: TargetConnectPolicy = serde_json::from_value(json!({
            "id": "p-1",
            "name": "ops",
            "timeExpires": "2024-05-01T00:00:00Z",
            "subjects": [{"id": "u-1", "type": "User"}],
            "groups": [{"id": "g-1", "name": "admins"}],
            "environments": [{"id": "env-1"}],
            "targets": [{"id": "t-1", "type": "Bzero"}],
            "targetUsers": [{"userName": "root"}],
            "verbs": [{"type": "Shell"}, {"type": "RDP"}]
        }))
        .unwrap();

        assert_eq!(policy.id(), "p-1");
        assert_eq!(policy.name(), "ops");
        assert_eq!(policy.description(), "");
        assert_eq!(policy.subjects()[0].subject_type, SubjectType::User);
        assert_eq!(policy.groups()[0].name, "admins");
        assert_eq!(policy.environment_ids(), vec!["env-1"]);
        assert_eq!(policy.target_user_names(), vec!["root"]);
        assert_eq!(policy.verb_names(), vec!["Shell", "RDP"]);
        assert_eq!(policy.policy_type(), PolicyType::TargetConnect);
    }

    #[test]
    fn test_create_body_omits_unset_fields() {
        let policy = JitPolicy {
            policy: Policy {
                name: "break-glass".to_string(),
                ..Policy::default()
            },
            duration: Some(60),
            ..JitPolicy::default()
        };

        let value = serde_json::to_value(&policy).unwrap();
        assert_eq!(value, json!({"name": "break-glass", "duration": 60}));
    }

    #[test]
    fn test_absent_lists_read_as_empty() {
        let policy: KubernetesPolicy = serde_json::from_value(json!({"id": "k-1"})).unwrap();
        assert!(policy.clusters().is_empty());
        assert!(policy.cluster_user_names().is_empty());
        assert!(policy.subjects().is_empty());
    }

    #[test]
    fn test_organization_controls_defaults() {
        let policy: OrganizationControlsPolicy =
            serde_json::from_value(json!({"id": "o-1", "mfaEnabled": true})).unwrap();
        assert!(policy.mfa_enabled());
        assert_eq!(policy.mfa_duration(), 0);
        assert_eq!(policy.policy_type(), PolicyType::OrganizationControls);
    }

    #[test]
    fn test_list_options_join_values() {
        let opts = ListPolicyOptions::default()
            .with_subjects(["alice@example.com", "bob@example.com"])
            .with_groups(["ops"]);
        assert_eq!(opts.subjects.as_deref(), Some("alice@example.com,bob@example.com"));
        assert_eq!(opts.groups.as_deref(), Some("ops"));
    }
}
