// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Subject shapes for `api/v2/subjects`, covering every caller kind

use serde::{Deserialize, Serialize};

use crate::common::{SubjectInterface, SubjectType};
use crate::macros::api_enum;
use crate::timestamp::Timestamp;

api_enum! {
    pub enum RoleType {
        User => "User",
        Admin => "Admin",
    }
}

/// Body of the role-changing PATCH on users and subjects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModifyRoleRequest {
    pub role: RoleType,
}

impl ModifyRoleRequest {
    pub fn new(role: RoleType) -> Self {
        Self { role }
    }
}

/// A user, API key or service account as seen by the subjects endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subject {
    pub id: String,
    pub organization_id: String,
    pub email: String,
    pub is_admin: bool,
    pub last_login: Option<Timestamp>,
    pub time_created: Timestamp,
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
}

impl SubjectInterface for Subject {
    fn id(&self) -> &str {
        &self.id
    }

    fn subject_type(&self) -> SubjectType {
        self.subject_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subject_reports_its_own_type() {
        let subject: Subject = serde_json::from_value(json!({
            "id": "s-1",
            "email": "ci@example.com",
            "type": "ServiceAccount",
            "lastLogin": null,
            "timeCreated": "2023-06-01T12:00:00Z"
        }))
        .unwrap();
        assert_eq!(subject.subject_type(), SubjectType::ServiceAccount);
        assert_eq!(SubjectInterface::id(&subject), "s-1");
        assert!(subject.last_login.is_none());
    }

    #[test]
    fn test_modify_role_body() {
        assert_eq!(
            serde_json::to_value(ModifyRoleRequest::new(RoleType::Admin)).unwrap(),
            json!({"role": "Admin"})
        );
    }
}
