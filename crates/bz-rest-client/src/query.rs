// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Encoding of list/filter option structs into query strings

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{RestClientError, RestClientResult};

/// Append `opts` to `path` as an `application/x-www-form-urlencoded` query.
///
/// `None` returns the path untouched. Otherwise any existing query on the
/// path is replaced: null members are dropped, arrays become one pair per
/// element, and pairs are sorted by key.
pub fn add_options<O>(path: &str, opts: Option<&O>) -> RestClientResult<String>
where
    O: Serialize + ?Sized,
{
    let Some(opts) = opts else {
        return Ok(path.to_string());
    };

    let pairs = query_pairs(opts)?;
    let bare = path.split_once('?').map_or(path, |(bare, _)| bare);
    if pairs.is_empty() {
        return Ok(bare.to_string());
    }

    let mut encoder = url::form_urlencoded::Serializer::new(String::new());
    for (key, values) in &pairs {
        for value in values {
            encoder.append_pair(key, value);
        }
    }
    Ok(format!("{bare}?{}", encoder.finish()))
}

fn query_pairs<O>(opts: &O) -> RestClientResult<BTreeMap<String, Vec<String>>>
where
    O: Serialize + ?Sized,
{
    let Value::Object(map) = serde_json::to_value(opts)? else {
        return Err(RestClientError::Query(
            "query options must serialize to an object".to_string(),
        ));
    };

    let mut pairs: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in map {
        let encoded = match value {
            Value::Null => continue,
            Value::Array(items) => items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(|item| scalar(&key, item))
                .collect::<RestClientResult<Vec<_>>>()?,
            other => vec![scalar(&key, other)?],
        };
        if !encoded.is_empty() {
            pairs.entry(key).or_default().extend(encoded);
        }
    }
    Ok(pairs)
}

fn scalar(key: &str, value: Value) -> RestClientResult<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(RestClientError::Query(format!(
            "unsupported nested value for query key '{key}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bz_api_contract::agents::{AgentType, ListAgentsOptions};
    use bz_api_contract::events::SubjectEventOptions;
    use bz_api_contract::policies::ListPolicyOptions;
    use bz_api_contract::Timestamp;
    use serde_json::json;

    #[test]
    fn test_none_leaves_path_unchanged() {
        let path = add_options::<ListAgentsOptions>("api/v2/agents?keep=1", None).unwrap();
        assert_eq!(path, "api/v2/agents?keep=1");
    }

    #[test]
    fn test_lists_repeat_keys_and_keys_are_sorted() {
        let opts = ListAgentsOptions {
            agent_types: vec![AgentType::Windows, AgentType::Linux],
            name: "web".to_string(),
            ..Default::default()
        };
        let path = add_options("api/v2/agents", Some(&opts)).unwrap();
        assert_eq!(path, "api/v2/agents?agentTypes=Windows&agentTypes=Linux&name=web");
    }

    #[test]
    fn test_existing_query_is_replaced() {
        let opts = ListPolicyOptions::default().with_subjects(["s-1", "s-2"]);
        let path = add_options("api/v2/policies/proxy?stale=true", Some(&opts)).unwrap();
        assert_eq!(path, "api/v2/policies/proxy?subjects=s-1%2Cs-2");
    }

    #[test]
    fn test_empty_encoding_yields_bare_path() {
        let path = add_options("api/v2/events/subject?old=1", Some(&SubjectEventOptions::default())).unwrap();
        assert_eq!(path, "api/v2/events/subject");
    }

    #[test]
    fn test_scalars_use_json_text() {
        let start: Timestamp = "2024-01-02T03:04:05Z".parse().unwrap();
        let opts = SubjectEventOptions {
            is_admin: Some(false),
            event_count: 10,
            start_timestamp: Some(start),
            ..Default::default()
        };
        let path = add_options("api/v2/events/subject", Some(&opts)).unwrap();
        assert_eq!(
            path,
            "api/v2/events/subject?eventCount=10&isAdmin=false&startTimestamp=2024-01-02T03%3A04%3A05Z"
        );
    }

    #[test]
    fn test_nested_objects_are_rejected() {
        let err = add_options("api/v2/x", Some(&json!({"filter": {"a": 1}}))).unwrap_err();
        assert!(matches!(err, RestClientError::Query(_)));

        let err = add_options("api/v2/x", Some(&json!(["a"]))).unwrap_err();
        assert!(matches!(err, RestClientError::Query(_)));
    }

    #[test]
    fn test_spaces_are_form_encoded() {
        let path = add_options("api/v2/x", Some(&json!({"name": "prod east"}))).unwrap();
        assert_eq!(path, "api/v2/x?name=prod+east");
    }
}
