// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Endpoint paths, query encoding and body handling of the resource services

use bz_rest_client::types::agents::{AgentType, ListAgentsOptions};
use bz_rest_client::types::all_targets::{ListAllTargetsOptions, TargetInterface};
use bz_rest_client::types::autodiscovery::{BzeroBashAutodiscoveryOptions, TargetNameOption};
use bz_rest_client::types::events::{AgentStatusChangeEventOptions, SubjectEventOptions};
use bz_rest_client::types::mfa::EnableMfaRequest;
use bz_rest_client::types::policies::{ListPolicyOptions, PolicyInterface};
use bz_rest_client::{RestClient, RestClientError};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn client_for(server: &MockServer) -> RestClient {
    RestClient::builder().base_url(server.base_url()).build().unwrap()
}

#[tokio::test]
async fn policy_list_filters_are_comma_joined() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/policies/target-connect")
                .query_param("subjects", "s-1,s-2")
                .query_param("groups", "ops");
            then.status(200).json_body(json!([{
                "id": "p-1",
                "name": "ops-shell",
                "subjects": [{"id": "s-1", "type": "User"}],
                "verbs": [{"type": "Shell"}]
            }]));
        })
        .await;

    let opts = ListPolicyOptions::default()
        .with_subjects(["s-1", "s-2"])
        .with_groups(["ops"]);
    let policies = client_for(&server)
        .policies()
        .list_target_connect_policies(Some(&opts))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(policies.len(), 1);
    assert_eq!(policies[0].name(), "ops-shell");
    assert_eq!(policies[0].verbs().len(), 1);
}

#[tokio::test]
async fn jit_policies_use_short_kind_segment() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/v2/policies/just-in-time/p-9");
            then.status(200);
        })
        .await;

    client_for(&server).policies().delete_jit_policy("p-9").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn list_values_become_repeated_query_keys() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/agents")
                .query_param("agentTypes", "Cluster")
                .query_param("agentTypes", "Windows")
                .query_param("environmentName", "prod east");
            then.status(200).json_body(json!([]));
        })
        .await;

    let opts = ListAgentsOptions {
        agent_types: vec![AgentType::Cluster, AgentType::Windows],
        environment_name: "prod east".to_string(),
        ..Default::default()
    };
    let agents = client_for(&server).agents().list_agents(Some(&opts)).await.unwrap();

    mock.assert_async().await;
    assert!(agents.is_empty());
}

#[tokio::test]
async fn subject_events_encode_timestamps_and_counts() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/events/subject")
                .query_param("startTimestamp", "2024-01-02T03:04:05Z")
                .query_param("eventCount", "50");
            then.status(200).json_body(json!(null));
        })
        .await;

    let opts = SubjectEventOptions {
        start_timestamp: Some("2024-01-02T03:04:05Z".parse().unwrap()),
        event_count: 50,
        ..Default::default()
    };
    let events = client_for(&server).events().list_subject_events(Some(&opts)).await.unwrap();

    mock.assert_async().await;
    assert!(events.is_empty());
}

#[tokio::test]
async fn agent_status_events_require_target_before_any_request() {
    let server = MockServer::start_async().await;
    let client = client_for(&server);

    let err = client.events().list_agent_status_change_events(None).await.unwrap_err();
    assert!(matches!(err, RestClientError::InvalidArgument(_)));

    let opts = AgentStatusChangeEventOptions::default();
    let err = client.events().list_agent_status_change_events(Some(&opts)).await.unwrap_err();
    assert!(matches!(err, RestClientError::InvalidArgument(ref msg) if msg.contains("TargetID")));
}

#[tokio::test]
async fn agent_status_events_query_by_target() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/events/agent-status-change")
                .query_param("targetId", "t-1");
            then.status(200).json_body(json!([{
                "statusChange": "OnlineToOffline",
                "timeStamp": "2024-06-01T12:00:00Z"
            }]));
        })
        .await;

    let opts = AgentStatusChangeEventOptions::for_target("t-1");
    let events = client_for(&server)
        .events()
        .list_agent_status_change_events(Some(&opts))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].status_change, "OnlineToOffline");
}

#[tokio::test]
async fn all_targets_always_sends_scope_flags() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/targets")
                .query_param("allTargetsInOrg", "true")
                .query_param("userEmail", "");
            then.status(200).json_body(json!({
                "Ssh": [{"id": "t-1", "name": "bastion", "status": "Online"}],
                "Web": null
            }));
        })
        .await;

    let opts = ListAllTargetsOptions {
        all_targets_in_org: true,
        ..Default::default()
    };
    let all = client_for(&server).targets().list_all_targets(Some(&opts)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(all.len(), 1);
    assert_eq!(all.ssh[0].name(), "bastion");
}

#[tokio::test]
async fn session_recording_streams_verbatim_into_sink() {
    let recording = "{\"version\": 2, \"width\": 80}\n[0.5, \"o\", \"$ ls\\r\\n\"]\n";
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2/session-recordings/c-1");
            then.status(200).header("content-type", "text/plain").body(recording);
        })
        .await;

    let mut sink: Vec<u8> = Vec::new();
    let written = client_for(&server)
        .session_recordings()
        .download_session_recording_file("c-1", &mut sink)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(written, recording.len() as u64);
    assert_eq!(sink, recording.as_bytes());
}

#[tokio::test]
async fn session_recording_download_reports_api_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2/session-recordings/c-2");
            then.status(404).json_body(json!({"errorMsg": "no recording"}));
        })
        .await;

    let mut sink: Vec<u8> = Vec::new();
    let err = client_for(&server)
        .session_recordings()
        .download_session_recording_file("c-2", &mut sink)
        .await
        .unwrap_err();

    assert!(err.is_api_error_status(404));
    assert!(sink.is_empty());
}

#[tokio::test]
async fn text_endpoints_return_body_as_is() {
    let script = "#!/bin/bash\nset -e\necho install\n";
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2/autodiscovery-scripts/container");
            then.status(200).body(script);
        })
        .await;

    let body = client_for(&server)
        .autodiscovery_scripts()
        .get_container_bash_autodiscovery_script()
        .await
        .unwrap();
    assert_eq!(body, script);
}

#[tokio::test]
async fn bzero_script_sends_both_options() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/autodiscovery-scripts/bzero/bash")
                .query_param("targetNameOption", "AwsEc2Metadata")
                .query_param("environmentId", "env-1");
            then.status(200).json_body(json!({"autodiscoveryScript": "echo hi"}));
        })
        .await;

    let opts = BzeroBashAutodiscoveryOptions {
        target_name_option: TargetNameOption::AwsEc2Metadata,
        environment_id: "env-1".to_string(),
    };
    let script = client_for(&server)
        .autodiscovery_scripts()
        .get_bzero_bash_autodiscovery_script(&opts)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(script.script, "echo hi");
}

#[tokio::test]
async fn mfa_enable_posts_user_id_and_ignores_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v2/mfa/setup")
                .json_body(json!({"userId": "u-1"}));
            then.status(200).json_body(json!({}));
        })
        .await;

    client_for(&server).mfa().enable_mfa(&EnableMfaRequest::new("u-1")).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn service_account_mfa_rotation_returns_secret() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PATCH).path("/api/v2/mfa/rotate/sa-1");
            then.status(200).json_body(json!("JBSWY3DPEHPK3PXP"));
        })
        .await;

    let secret = client_for(&server)
        .mfa()
        .rotate_service_account_mfa_secret("sa-1")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(secret, "JBSWY3DPEHPK3PXP");
}

#[tokio::test]
async fn group_fetch_is_a_bodyless_post() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v2/organization/groups/fetch");
            then.status(200).json_body(json!([{"idPGroupId": "g-1", "name": "eng"}]));
        })
        .await;

    let groups = client_for(&server).organization().fetch_groups().await.unwrap();

    mock.assert_async().await;
    assert_eq!(groups[0].id, "g-1");
}

#[tokio::test]
async fn invalidate_jwks_cache_uses_patch() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PATCH).path("/api/v2/service-accounts/invalidate-cache/sa-1");
            then.status(200);
        })
        .await;

    client_for(&server)
        .service_accounts()
        .invalidate_jwks_url_cache("sa-1")
        .await
        .unwrap();
    mock.assert_async().await;
}
