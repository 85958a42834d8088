//! HTTP client for the platform's design-time API (reqwest-based).
//!
//! Implements the [`LoginMethodApi`] boundary trait over the platform's
//! JSON endpoints. Transient failures are retried per the configured
//! [`RetryPolicy`]; everything else surfaces unchanged.

use async_trait::async_trait;
use reqwest::{header, Client, Method, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use appbridge_login_methods::{
    ExistingLoginMethod, LoginMethodApi, LoginMethodError, LoginMethodRequest, LoginMethodResult,
};

use crate::config::{PlatformAuth, PlatformConfig};
use crate::retry::RetryPolicy;

/// Client for the platform's design-time API.
#[derive(Clone)]
pub struct PlatformClient {
    config: PlatformConfig,
    http: Client,
    retry: RetryPolicy,
}

impl std::fmt::Debug for PlatformClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformClient")
            .field("config", &self.config.redacted())
            .field("retry", &self.retry)
            .finish()
    }
}

impl PlatformClient {
    /// Build a client from the given configuration with the default retry
    /// policy.
    pub fn new(config: PlatformConfig) -> LoginMethodResult<Self> {
        Self::with_retry_policy(config, RetryPolicy::default())
    }

    /// Build a client with an explicit retry policy.
    pub fn with_retry_policy(
        config: PlatformConfig,
        retry: RetryPolicy,
    ) -> LoginMethodResult<Self> {
        config.validate()?;

        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.connection.read_timeout_secs))
            .connect_timeout(Duration::from_secs(
                config.connection.connection_timeout_secs,
            ));

        if !config.connection.tls_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder
            .build()
            .map_err(|e| LoginMethodError::InvalidConfiguration {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            config,
            http,
            retry,
        })
    }

    /// Build the login-methods endpoint URL, percent-encoding the optional
    /// name segment (names may contain spaces or slashes).
    fn endpoint(&self, name: Option<&str>) -> LoginMethodResult<String> {
        let mut url = url::Url::parse(&self.config.base_url).map_err(|e| {
            LoginMethodError::InvalidConfiguration {
                message: format!("invalid base URL '{}': {e}", self.config.base_url),
            }
        })?;
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                LoginMethodError::InvalidConfiguration {
                    message: format!("base URL is not an HTTP URL: {}", self.config.base_url),
                }
            })?;
            segments.pop_if_empty().extend(["api", "v1", "login-methods"]);
            if let Some(name) = name {
                segments.push(name);
            }
        }
        Ok(url.into())
    }

    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.auth {
            PlatformAuth::None => builder,
            PlatformAuth::Basic { username, password } => {
                builder.basic_auth(username, Some(password))
            }
            PlatformAuth::Bearer { token } => builder.bearer_auth(token),
            PlatformAuth::ApiKey { header_name, key } => builder.header(header_name, key),
        }
    }

    /// One request attempt: send, then fold the response into the shared
    /// error taxonomy.
    async fn send_once(
        &self,
        operation: &str,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> LoginMethodResult<Value> {
        let mut builder = self.http.request(method, url);
        builder = self.apply_auth(builder);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| LoginMethodError::Network {
                operation: operation.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        debug!(operation, url, status = status.as_u16(), "Platform response");

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(LoginMethodError::RateLimited { retry_after_secs });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LoginMethodError::Remote {
                operation: operation.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        response.json().await.map_err(|e| LoginMethodError::Network {
            operation: operation.to_string(),
            message: format!("invalid JSON response: {e}"),
        })
    }

    /// Send with retry on transient failures.
    async fn request(
        &self,
        operation: &str,
        method: Method,
        url: String,
        body: Option<Value>,
    ) -> LoginMethodResult<Value> {
        self.retry
            .execute(operation, || {
                self.send_once(operation, method.clone(), &url, body.as_ref())
            })
            .await
    }
}

#[async_trait]
impl LoginMethodApi for PlatformClient {
    async fn get_login_method_details(
        &self,
        name: &str,
    ) -> LoginMethodResult<ExistingLoginMethod> {
        let url = self.endpoint(Some(name))?;
        let value = self
            .request("getLoginMethodDetails", Method::GET, url, None)
            .await
            .map_err(|error| match error {
                LoginMethodError::Remote { status: 404, .. } => LoginMethodError::NotFound {
                    name: name.to_string(),
                },
                other => other,
            })?;

        serde_json::from_value(value).map_err(LoginMethodError::from)
    }

    async fn create_login_method(
        &self,
        request: &LoginMethodRequest,
    ) -> LoginMethodResult<Value> {
        let body = serde_json::to_value(request)?;
        self.request(
            "createLoginMethod",
            Method::POST,
            self.endpoint(None)?,
            Some(body),
        )
        .await
    }

    async fn update_login_method(
        &self,
        request: &LoginMethodRequest,
        existing: &ExistingLoginMethod,
    ) -> LoginMethodResult<Value> {
        let body = serde_json::to_value(request)?;
        let url = self.endpoint(Some(&existing.name))?;
        self.request("updateLoginMethod", Method::PUT, url, Some(body))
            .await
    }
}
