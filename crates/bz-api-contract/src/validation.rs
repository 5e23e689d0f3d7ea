// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Validation helpers for API contract types

use validator::Validate;

use crate::error::ApiContractError;
use crate::events::AgentStatusChangeEventOptions;

/// Validate agent status change filters; the target id is mandatory
pub fn validate_agent_status_change_options(
    opts: &AgentStatusChangeEventOptions,
) -> Result<(), ApiContractError> {
    opts.validate()?;
    Ok(())
}

/// Validate that a base URL is absolute and uses http or https
pub fn validate_base_url(url_str: &str) -> Result<url::Url, ApiContractError> {
    let url = url::Url::parse(url_str)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiContractError::Invalid(format!(
            "unsupported URL scheme '{other}' in {url_str}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_status_change_options_without_target_fail() {
        let err = validate_agent_status_change_options(&AgentStatusChangeEventOptions::default())
            .unwrap_err();
        assert!(matches!(err, ApiContractError::Validation(_)));
        assert!(err.to_string().contains("target_id"));

        let ok = AgentStatusChangeEventOptions::for_target("t-1");
        assert!(validate_agent_status_change_options(&ok).is_ok());
    }

    #[test]
    fn test_base_url_scheme() {
        assert!(validate_base_url("https://cloud.bastionzero.com").is_ok());
        assert!(validate_base_url("http://localhost:8080/").is_ok());
        assert!(matches!(
            validate_base_url("ftp://example.com"),
            Err(ApiContractError::Invalid(_))
        ));
        assert!(matches!(
            validate_base_url("not a url"),
            Err(ApiContractError::InvalidUrl(_))
        ));
    }
}
