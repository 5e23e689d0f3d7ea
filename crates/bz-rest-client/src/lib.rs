// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! REST API client for the BastionZero service
//!
//! [`RestClient`] owns the transport: base URL resolution, authentication
//! headers, JSON encoding and error decoding. Each API resource is reached
//! through a borrowed service handle such as [`RestClient::policies`] or
//! [`RestClient::targets`]; request and response shapes live in
//! [`bz_api_contract`], re-exported here as [`types`].
//!
//! ```no_run
//! # async fn run() -> bz_rest_client::RestClientResult<()> {
//! let client = bz_rest_client::RestClient::from_api_secret("c2VjcmV0")?;
//! for env in client.environments().list_environments().await? {
//!     println!("{} {}", env.id, env.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod services;

pub use auth::AuthConfig;
pub use bz_api_contract as types;
pub use client::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, RestClient, RestClientBuilder};
pub use config::ClientConfig;
pub use error::{ApiError, RestClientError, RestClientResult, is_api_error_status};
