// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bz_api_contract::subjects::{ModifyRoleRequest, Subject};

use crate::error::RestClientResult;

const SUBJECTS_BASE_PATH: &str = "api/v2/subjects";

service_handle! {
    /// Subjects (users, API keys, service accounts) under `api/v2/subjects`
    SubjectsService
}

impl SubjectsService<'_> {
    pub async fn me(&self) -> RestClientResult<Subject> {
        self.client.get(&format!("{SUBJECTS_BASE_PATH}/me")).await
    }

    pub async fn get_subject(&self, id_or_email: &str) -> RestClientResult<Subject> {
        self.client.get(&format!("{SUBJECTS_BASE_PATH}/{id_or_email}")).await
    }

    pub async fn modify_subject_role(
        &self,
        id: &str,
        request: &ModifyRoleRequest,
    ) -> RestClientResult<()> {
        self.client.patch_unit(&format!("{SUBJECTS_BASE_PATH}/{id}"), request).await
    }

    pub async fn list_subjects(&self) -> RestClientResult<Vec<Subject>> {
        self.client.get(SUBJECTS_BASE_PATH).await
    }

    pub async fn close_subject_connections(&self, id: &str) -> RestClientResult<()> {
        self.client.patch_empty(&format!("{SUBJECTS_BASE_PATH}/{id}/close-connections")).await
    }
}
