// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! One borrowed handle per API resource, obtained from [`crate::RestClient`]

macro_rules! service_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            client: &'a $crate::client::RestClient,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(client: &'a $crate::client::RestClient) -> Self {
                Self { client }
            }
        }
    };
}

mod agents;
mod api_keys;
mod autodiscovery_scripts;
mod connections;
mod environments;
mod events;
mod github_actions;
mod mfa;
mod okta_public_keys;
mod organization;
mod policies;
mod service_accounts;
mod session_recordings;
mod subjects;
mod targets;
mod users;

pub use agents::AgentsService;
pub use api_keys::ApiKeysService;
pub use autodiscovery_scripts::AutodiscoveryScriptsService;
pub use connections::ConnectionsService;
pub use environments::EnvironmentsService;
pub use events::EventsService;
pub use github_actions::GitHubActionsService;
pub use mfa::MfaService;
pub use okta_public_keys::OktaPublicKeysService;
pub use organization::OrganizationService;
pub use policies::PoliciesService;
pub use service_accounts::ServiceAccountsService;
pub use session_recordings::SessionRecordingsService;
pub use subjects::SubjectsService;
pub use targets::TargetsService;
pub use users::UsersService;
