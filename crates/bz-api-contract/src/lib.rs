// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! BastionZero REST API contract types and validation
//!
//! Request and response shapes for every `api/v2` resource, the string
//! enumerations they use, and the error body the API returns with a non-2xx
//! status. Modules are kept as namespaces since several resources reuse
//! names like `Environment` or `Target` for different shapes.

mod macros;
mod serde_helpers;

pub mod agents;
pub mod all_targets;
pub mod api_keys;
pub mod autodiscovery;
pub mod common;
pub mod connections;
pub mod environments;
pub mod error;
pub mod events;
pub mod github_actions;
pub mod mfa;
pub mod okta;
pub mod organization;
pub mod policies;
pub mod service_accounts;
pub mod session_recordings;
pub mod subjects;
pub mod targets;
pub mod timestamp;
pub mod users;
pub mod validation;

pub use common::{Port, SubjectInterface, SubjectRef, SubjectType, TargetType};
pub use error::{ApiContractError, ApiErrorBody};
pub use timestamp::Timestamp;
