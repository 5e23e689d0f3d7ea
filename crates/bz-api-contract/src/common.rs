// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Types shared across several resources

use serde::{Deserialize, Serialize};

use crate::macros::api_enum;

api_enum! {
    /// Kind of target a policy, connection or event refers to
    pub enum TargetType {
        Bzero => "Bzero",
        Cluster => "Cluster",
        DynamicAccessConfig => "DynamicAccessConfig",
        Web => "Web",
        Db => "Db",
    }
}

api_enum! {
    /// Kind of identity calling the API
    pub enum SubjectType {
        User => "User",
        ApiKey => "ApiKey",
        ServiceAccount => "ServiceAccount",
    }
}

/// A TCP port wrapper as used by proxied targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u16>,
}

impl Port {
    pub fn new(value: u16) -> Self {
        Self { value: Some(value) }
    }
}

/// Identifier block embedded in every subject kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectRef {
    pub id: String,
}

/// Read access common to users, API keys and service accounts
pub trait SubjectInterface {
    fn id(&self) -> &str;
    fn subject_type(&self) -> SubjectType;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_values_round_trip_through_json() {
        let json = serde_json::to_string(&TargetType::DynamicAccessConfig).unwrap();
        assert_eq!(json, r#""DynamicAccessConfig""#);
        let back: TargetType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TargetType::DynamicAccessConfig);
    }

    #[test]
    fn test_unrecognized_wire_value_decodes_as_unknown() {
        let value: TargetType = serde_json::from_str(r#""Quantum""#).unwrap();
        assert_eq!(value, TargetType::Unknown);
        assert!(!value.is_valid());
        assert!(serde_json::to_string(&value).is_err());
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("apikey".parse::<SubjectType>().unwrap(), SubjectType::ApiKey);
        assert_eq!("SERVICEACCOUNT".parse::<SubjectType>().unwrap(), SubjectType::ServiceAccount);
        let err = "robot".parse::<SubjectType>().unwrap_err();
        assert_eq!(err.to_string(), "robot does not belong to SubjectType values");
    }

    #[test]
    fn test_values_lists_known_variants_only() {
        assert_eq!(
            SubjectType::values(),
            &[SubjectType::User, SubjectType::ApiKey, SubjectType::ServiceAccount]
        );
        assert_eq!(TargetType::default(), TargetType::Unknown);
    }

    #[test]
    fn test_port_omits_missing_value() {
        assert_eq!(serde_json::to_string(&Port::default()).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&Port::new(5432)).unwrap(), r#"{"value":5432}"#);
    }
}
