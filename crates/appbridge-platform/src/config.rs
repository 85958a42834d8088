//! Platform client configuration.
//!
//! Configuration is passed explicitly to the client constructor; the
//! client never reads process-global state.

use serde::{Deserialize, Serialize};

use appbridge_login_methods::{LoginMethodError, LoginMethodResult};

/// Authentication material carried on every platform request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlatformAuth {
    /// No authentication (local development targets only).
    None,
    /// HTTP basic authentication.
    Basic { username: String, password: String },
    /// Bearer token.
    Bearer { token: String },
    /// Static API key in a named header.
    ApiKey { header_name: String, key: String },
}

impl PlatformAuth {
    /// Redacted copy safe for logging and display.
    #[must_use]
    pub fn redacted(&self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Basic { username, .. } => Self::Basic {
                username: username.clone(),
                password: "***".to_string(),
            },
            Self::Bearer { .. } => Self::Bearer {
                token: "***".to_string(),
            },
            Self::ApiKey { header_name, .. } => Self::ApiKey {
                header_name: header_name.clone(),
                key: "***".to_string(),
            },
        }
    }
}

/// Connection settings for the platform client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionSettings {
    /// Connection timeout in seconds.
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout_secs: u64,

    /// Read timeout in seconds.
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64,

    /// Whether to verify the platform's TLS certificate.
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_read_timeout() -> u64 {
    60
}

fn default_true() -> bool {
    true
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            connection_timeout_secs: default_connection_timeout(),
            read_timeout_secs: default_read_timeout(),
            tls_verify: default_true(),
        }
    }
}

/// Configuration for a [`PlatformClient`](crate::client::PlatformClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Base URL of the platform's design-time API
    /// (e.g. `https://platform.example.com`).
    pub base_url: String,

    /// Authentication material.
    pub auth: PlatformAuth,

    /// Connection settings.
    #[serde(default)]
    pub connection: ConnectionSettings,
}

impl PlatformConfig {
    /// Create a configuration with default connection settings.
    pub fn new(base_url: impl Into<String>, auth: PlatformAuth) -> Self {
        Self {
            base_url: base_url.into(),
            auth,
            connection: ConnectionSettings::default(),
        }
    }

    /// Override the connection settings.
    #[must_use]
    pub fn with_connection(mut self, connection: ConnectionSettings) -> Self {
        self.connection = connection;
        self
    }

    /// Validate the configuration before a client is built.
    pub fn validate(&self) -> LoginMethodResult<()> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            LoginMethodError::InvalidConfiguration {
                message: format!("invalid base URL '{}': {e}", self.base_url),
            }
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(LoginMethodError::InvalidConfiguration {
                message: format!("unsupported URL scheme: {}", parsed.scheme()),
            });
        }

        match &self.auth {
            PlatformAuth::Basic { username, .. } if username.is_empty() => {
                Err(LoginMethodError::InvalidConfiguration {
                    message: "basic auth requires a non-empty username".to_string(),
                })
            }
            PlatformAuth::Bearer { token } if token.is_empty() => {
                Err(LoginMethodError::InvalidConfiguration {
                    message: "bearer auth requires a non-empty token".to_string(),
                })
            }
            PlatformAuth::ApiKey { header_name, key }
                if header_name.is_empty() || key.is_empty() =>
            {
                Err(LoginMethodError::InvalidConfiguration {
                    message: "API key auth requires a header name and a key".to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Redacted copy safe for logging and display.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            auth: self.auth.redacted(),
            connection: self.connection.clone(),
        }
    }
}
