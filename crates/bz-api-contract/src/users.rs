// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! User shapes for `api/v2/users`

use serde::{Deserialize, Serialize};

use crate::common::{SubjectInterface, SubjectRef, SubjectType};
use crate::timestamp::Timestamp;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(flatten)]
    pub subject: SubjectRef,
    pub organization_id: String,
    pub full_name: String,
    pub email: String,
    pub is_admin: bool,
    pub time_created: Timestamp,
    pub last_login: Option<Timestamp>,
}

impl SubjectInterface for User {
    fn id(&self) -> &str {
        &self.subject.id
    }

    fn subject_type(&self) -> SubjectType {
        SubjectType::User
    }
}
