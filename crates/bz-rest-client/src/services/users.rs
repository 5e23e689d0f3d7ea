// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bz_api_contract::subjects::ModifyRoleRequest;
use bz_api_contract::users::User;

use crate::error::RestClientResult;

const USERS_BASE_PATH: &str = "api/v2/users";

service_handle! {
    /// Users under `api/v2/users`
    UsersService
}

impl UsersService<'_> {
    /// The user the client is authenticated as
    pub async fn me(&self) -> RestClientResult<User> {
        self.client.get(&format!("{USERS_BASE_PATH}/me")).await
    }

    pub async fn get_user(&self, id_or_email: &str) -> RestClientResult<User> {
        self.client.get(&format!("{USERS_BASE_PATH}/{id_or_email}")).await
    }

    pub async fn delete_user(&self, id: &str) -> RestClientResult<()> {
        self.client.delete(&format!("{USERS_BASE_PATH}/{id}")).await
    }

    pub async fn modify_user_role(&self, id: &str, request: &ModifyRoleRequest) -> RestClientResult<()> {
        self.client.patch_unit(&format!("{USERS_BASE_PATH}/{id}"), request).await
    }

    pub async fn list_users(&self) -> RestClientResult<Vec<User>> {
        self.client.get(USERS_BASE_PATH).await
    }

    /// Close every open connection belonging to the user
    pub async fn close_user_connections(&self, id: &str) -> RestClientResult<()> {
        self.client.patch_empty(&format!("{USERS_BASE_PATH}/{id}/close-connections")).await
    }
}
