// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for the REST client

use std::fmt;

use bz_api_contract::ApiErrorBody;
use reqwest::{Method, StatusCode};
use thiserror::Error;
use url::Url;

/// Result type for REST client operations
pub type RestClientResult<T> = Result<T, RestClientError>;

/// Errors that can occur during REST client operations
#[derive(Debug, Error)]
pub enum RestClientError {
    #[error(transparent)]
    Api(Box<ApiError>),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Query encoding error: {0}")]
    Query(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("{0}")]
    Auth(String),

    #[error("Invalid arguments: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ApiError> for RestClientError {
    fn from(err: ApiError) -> Self {
        RestClientError::Api(Box::new(err))
    }
}

impl RestClientError {
    /// Status code of an API error, `None` for every other kind
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RestClientError::Api(err) => Some(err.status),
            _ => None,
        }
    }

    /// True only for an API error carrying exactly `code`
    pub fn is_api_error_status(&self, code: u16) -> bool {
        self.status().is_some_and(|status| status.as_u16() == code)
    }

    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            RestClientError::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Free-function form of [`RestClientError::is_api_error_status`]
pub fn is_api_error_status(err: &RestClientError, code: u16) -> bool {
    err.is_api_error_status(code)
}

/// A non-2xx response from the API
#[derive(Debug, Clone)]
pub struct ApiError {
    pub method: Method,
    pub url: Url,
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    pub fn message(&self) -> &str {
        &self.body.error_message
    }

    pub fn error_type(&self) -> &str {
        &self.body.error_type
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = &self.body;
        write!(f, "{} {}: ", self.method, self.url)?;

        if !body.error_type.is_empty() {
            write!(f, "{}: {} ({})", self.status, body.error_message, body.error_type)
        } else if !body.error_message.is_empty() {
            write!(f, "{}: {}", self.status, body.error_message)
        } else if !body.validation_errors.is_empty() {
            let props: Vec<String> = body
                .validation_errors
                .iter()
                .map(|(prop, errs)| format!("{prop}: {}", errs.join(", ")))
                .collect();
            write!(f, "{} Bad Request: {}", self.status.as_u16(), props.join(" "))
        } else {
            write!(f, "{}", self.status)
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn api_error(status: u16, body: ApiErrorBody) -> ApiError {
        ApiError {
            method: Method::GET,
            url: Url::parse("https://cloud.bastionzero.com/api/v2/policies/proxy").unwrap(),
            status: StatusCode::from_u16(status).unwrap(),
            body,
        }
    }

    #[test]
    fn test_display_with_type() {
        let err = api_error(
            404,
            ApiErrorBody {
                error_message: "Policy not found".to_string(),
                error_type: "NotFound".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(
            err.to_string(),
            "GET https://cloud.bastionzero.com/api/v2/policies/proxy: 404 Not Found: Policy not found (NotFound)"
        );
    }

    #[test]
    fn test_display_with_message_only() {
        let err = api_error(502, ApiErrorBody::from_raw_message("upstream unavailable"));
        assert_eq!(
            err.to_string(),
            "GET https://cloud.bastionzero.com/api/v2/policies/proxy: 502 Bad Gateway: upstream unavailable"
        );
    }

    #[test]
    fn test_display_with_validation_errors_sorted() {
        let mut validation_errors = BTreeMap::new();
        validation_errors.insert("name".to_string(), vec!["required".to_string()]);
        validation_errors.insert(
            "duration".to_string(),
            vec!["must be positive".to_string(), "must be an integer".to_string()],
        );
        let err = api_error(
            400,
            ApiErrorBody {
                validation_errors,
                ..Default::default()
            },
        );
        assert_eq!(
            err.to_string(),
            "GET https://cloud.bastionzero.com/api/v2/policies/proxy: 400 Bad Request: \
             duration: must be positive, must be an integer name: required"
        );
    }

    #[test]
    fn test_display_status_only() {
        let err = api_error(500, ApiErrorBody::default());
        assert_eq!(
            err.to_string(),
            "GET https://cloud.bastionzero.com/api/v2/policies/proxy: 500 Internal Server Error"
        );
    }

    #[test]
    fn test_status_predicate_needs_api_kind_and_code() {
        let err: RestClientError = api_error(404, ApiErrorBody::default()).into();
        assert!(err.is_api_error_status(404));
        assert!(!err.is_api_error_status(500));
        assert!(is_api_error_status(&err, 404));
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

        let other = RestClientError::InvalidArgument("opts is required".to_string());
        assert!(!other.is_api_error_status(404));
        assert!(other.status().is_none());
    }
}
