// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! API key authentication

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{RestClientError, RestClientResult};

/// Header carrying the pre-shared API key
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Credentials attached to every request
#[derive(Clone, Default)]
pub struct AuthConfig {
    api_secret: Option<String>,
}

impl AuthConfig {
    /// No credentials
    pub fn none() -> Self {
        Self::default()
    }

    /// Authenticate with an API key secret. The secret is checked by [`AuthConfig::headers`].
    pub fn api_secret(secret: impl Into<String>) -> Self {
        Self {
            api_secret: Some(secret.into()),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.api_secret.is_some()
    }

    /// Check the configured secret without building headers
    pub fn validate(&self) -> RestClientResult<()> {
        if let Some(secret) = &self.api_secret {
            if STANDARD.decode(secret).is_err() {
                return Err(RestClientError::Auth(format!(
                    "apiSecret ({secret}) is not valid base64"
                )));
            }
        }
        Ok(())
    }

    /// Headers carrying the credentials; the key value is marked sensitive
    pub fn headers(&self) -> RestClientResult<HeaderMap> {
        self.validate()?;

        let mut headers = HeaderMap::new();
        if let Some(secret) = &self.api_secret {
            let mut value = HeaderValue::from_str(secret)
                .map_err(|e| RestClientError::InvalidHeader(format!("{API_KEY_HEADER}: {e}")))?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static("x-api-key"), value);
        }
        Ok(headers)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_secret_sets_sensitive_header() {
        let headers = AuthConfig::api_secret("c2VjcmV0LWtleQ==").headers().unwrap();
        let value = headers.get(API_KEY_HEADER).unwrap();
        assert_eq!(value, "c2VjcmV0LWtleQ==");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_invalid_base64_is_rejected() {
        let err = AuthConfig::api_secret("not base64!").headers().unwrap_err();
        assert!(matches!(err, RestClientError::Auth(_)));
        assert_eq!(err.to_string(), "apiSecret (not base64!) is not valid base64");
    }

    #[test]
    fn test_no_credentials_yield_no_headers() {
        let auth = AuthConfig::none();
        assert!(!auth.has_credentials());
        assert!(auth.headers().unwrap().is_empty());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", AuthConfig::api_secret("c2VjcmV0"));
        assert!(!rendered.contains("c2VjcmV0"));
        assert!(rendered.contains("<redacted>"));
    }
}
