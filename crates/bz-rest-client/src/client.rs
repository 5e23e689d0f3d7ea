// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Main REST API client implementation

use std::time::Duration;

use bz_api_contract::ApiErrorBody;
use futures::StreamExt;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as HttpClient, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};
use url::Url;

use crate::auth::AuthConfig;
use crate::error::{ApiError, RestClientError, RestClientResult};
use crate::services::{
    AgentsService, ApiKeysService, AutodiscoveryScriptsService, ConnectionsService,
    EnvironmentsService, EventsService, GitHubActionsService, MfaService, OktaPublicKeysService,
    OrganizationService, PoliciesService, ServiceAccountsService, SessionRecordingsService,
    SubjectsService, TargetsService, UsersService,
};

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://cloud.bastionzero.com/";

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("bastionzero-sdk-rust/", env!("CARGO_PKG_VERSION"));

const MEDIA_TYPE_JSON: &str = "application/json";

/// REST API client for the BastionZero service
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RestClient {
    http_client: HttpClient,
    base_url: Url,
    user_agent: String,
    headers: HeaderMap,
}

impl RestClient {
    /// Start configuring a client
    pub fn builder() -> RestClientBuilder {
        RestClientBuilder::default()
    }

    /// Client for the production endpoint, optionally on a caller-supplied HTTP client
    pub fn new(http_client: Option<HttpClient>) -> RestClientResult<Self> {
        let mut builder = Self::builder();
        if let Some(http_client) = http_client {
            builder = builder.http_client(http_client);
        }
        builder.build()
    }

    /// Client for the production endpoint authenticated with an API key secret
    pub fn from_api_secret(secret: impl Into<String>) -> RestClientResult<Self> {
        Self::builder().api_secret(secret).build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn policies(&self) -> PoliciesService<'_> {
        PoliciesService::new(self)
    }

    pub fn targets(&self) -> TargetsService<'_> {
        TargetsService::new(self)
    }

    pub fn connections(&self) -> ConnectionsService<'_> {
        ConnectionsService::new(self)
    }

    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(self)
    }

    pub fn service_accounts(&self) -> ServiceAccountsService<'_> {
        ServiceAccountsService::new(self)
    }

    pub fn api_keys(&self) -> ApiKeysService<'_> {
        ApiKeysService::new(self)
    }

    pub fn subjects(&self) -> SubjectsService<'_> {
        SubjectsService::new(self)
    }

    pub fn agents(&self) -> AgentsService<'_> {
        AgentsService::new(self)
    }

    pub fn environments(&self) -> EnvironmentsService<'_> {
        EnvironmentsService::new(self)
    }

    pub fn events(&self) -> EventsService<'_> {
        EventsService::new(self)
    }

    pub fn mfa(&self) -> MfaService<'_> {
        MfaService::new(self)
    }

    pub fn organization(&self) -> OrganizationService<'_> {
        OrganizationService::new(self)
    }

    pub fn session_recordings(&self) -> SessionRecordingsService<'_> {
        SessionRecordingsService::new(self)
    }

    pub fn github_actions(&self) -> GitHubActionsService<'_> {
        GitHubActionsService::new(self)
    }

    pub fn autodiscovery_scripts(&self) -> AutodiscoveryScriptsService<'_> {
        AutodiscoveryScriptsService::new(self)
    }

    pub fn okta_public_keys(&self) -> OktaPublicKeysService<'_> {
        OktaPublicKeysService::new(self)
    }

    pub(crate) async fn get<T>(&self, path: &str) -> RestClientResult<T>
    where
        T: DeserializeOwned + Default,
    {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> RestClientResult<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> RestClientResult<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        self.request(Method::PATCH, path, Some(body)).await
    }

    pub(crate) async fn patch_unit<B>(&self, path: &str, body: &B) -> RestClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.request_unit(Method::PATCH, path, Some(body)).await
    }

    pub(crate) async fn post_unit<B>(&self, path: &str, body: &B) -> RestClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.request_unit(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> RestClientResult<()> {
        self.request_unit(Method::POST, path, None::<&()>).await
    }

    pub(crate) async fn patch_empty(&self, path: &str) -> RestClientResult<()> {
        self.request_unit(Method::PATCH, path, None::<&()>).await
    }

    pub(crate) async fn delete(&self, path: &str) -> RestClientResult<()> {
        self.request_unit(Method::DELETE, path, None::<&()>).await
    }

    /// Send a request and decode the JSON response into `T`.
    ///
    /// An empty or `null` success body yields `T::default()`.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> RestClientResult<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let response = self.execute(method, path, body).await?;
        let bytes = response.bytes().await?;
        if is_empty_payload(&bytes) {
            return Ok(T::default());
        }
        serde_json::from_slice(&bytes).map_err(RestClientError::from)
    }

    /// Send a request and discard whatever body a successful response has
    pub async fn request_unit<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> RestClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute(method, path, body).await?;
        Ok(())
    }

    /// GET `path` and return the body as text
    pub async fn request_text(&self, path: &str) -> RestClientResult<String> {
        let response = self.execute(Method::GET, path, None::<&()>).await?;
        let bytes = response.bytes().await?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }

    /// GET `path` and copy the body verbatim into `sink`, chunk by chunk.
    ///
    /// Returns the number of bytes written.
    pub async fn request_raw<W>(&self, path: &str, sink: &mut W) -> RestClientResult<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let response = self.execute(Method::GET, path, None::<&()>).await?;
        let mut stream = response.bytes_stream();
        let mut written = 0u64;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            sink.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        sink.flush().await?;
        Ok(written)
    }

    /// Build and send a request, turning a non-2xx status into [`ApiError`]
    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> RestClientResult<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(path)?;

        let mut headers = self.headers.clone();
        let mut request = self.http_client.request(method.clone(), url.clone());

        if carries_body(&method) {
            let payload = match body {
                Some(body) => serde_json::to_vec(body)?,
                None => Vec::new(),
            };
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(MEDIA_TYPE_JSON));
            request = request.body(payload);
        }

        request = request.headers(headers);

        debug!(%method, %url, "sending request");
        let response = request.send().await?;
        let status = response.status();
        debug!(%method, %url, status = status.as_u16(), "received response");

        if status.is_success() {
            return Ok(response);
        }

        let bytes = response.bytes().await?;
        let body = parse_error_body(&bytes);
        warn!(
            %method,
            %url,
            status = status.as_u16(),
            error_type = %body.error_type,
            "API request failed"
        );
        Err(ApiError {
            method,
            url,
            status,
            body,
        }
        .into())
    }
}

fn carries_body(method: &Method) -> bool {
    !matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::DELETE
    )
}

fn is_empty_payload(bytes: &[u8]) -> bool {
    let trimmed = bytes.trim_ascii();
    trimmed.is_empty() || trimmed == b"null"
}

/// Only a JSON object is read as the structured error; any other body is kept verbatim
fn parse_error_body(bytes: &[u8]) -> ApiErrorBody {
    if is_empty_payload(bytes) {
        return ApiErrorBody::default();
    }
    let raw = || ApiErrorBody::from_raw_message(String::from_utf8_lossy(bytes));
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_else(|_| raw()),
        _ => raw(),
    }
}

/// Builder for [`RestClient`]
#[derive(Debug, Default)]
pub struct RestClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    headers: Vec<(String, String)>,
    auth: AuthConfig,
    timeout: Option<Duration>,
    http_client: Option<HttpClient>,
}

impl RestClientBuilder {
    /// API endpoint; a trailing `/` is added when missing
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Product token prepended to the default user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Extra header sent with every request
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Authenticate with an API key secret (standard base64)
    pub fn api_secret(mut self, secret: impl Into<String>) -> Self {
        self.auth = AuthConfig::api_secret(secret);
        self
    }

    pub fn auth(mut self, auth: AuthConfig) -> Self {
        self.auth = auth;
        self
    }

    /// Whole-request timeout for the HTTP client this builder creates
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a caller-supplied HTTP client; `timeout` is then ignored
    pub fn http_client(mut self, http_client: HttpClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> RestClientResult<RestClient> {
        let base_url = normalize_base_url(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let user_agent = match self.user_agent.as_deref().map(str::trim) {
            Some(custom) if !custom.is_empty() => format!("{custom} {DEFAULT_USER_AGENT}"),
            _ => DEFAULT_USER_AGENT.to_string(),
        };

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| RestClientError::InvalidHeader(format!("{name}: {e}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| RestClientError::InvalidHeader(format!("{name}: {e}")))?;
            headers.append(header_name, header_value);
        }
        headers.extend(self.auth.headers()?);
        headers.insert(header::ACCEPT, HeaderValue::from_static(MEDIA_TYPE_JSON));
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_str(&user_agent)
                .map_err(|e| RestClientError::InvalidHeader(format!("User-Agent: {e}")))?,
        );

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = HttpClient::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(RestClient {
            http_client,
            base_url,
            user_agent,
            headers,
        })
    }
}

fn normalize_base_url(raw: &str) -> RestClientResult<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
