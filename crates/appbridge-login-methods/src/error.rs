//! Error types shared across the integration layer.
//!
//! Validation errors carry agent-visible text: a calling agent is expected
//! to read the message, correct its parameters, and retry. The exact
//! wording of the mapping errors is therefore part of the contract.

use thiserror::Error;

use crate::types::{LoginMethodKind, SourceKind, TargetKind};

/// Result alias used throughout the integration layer.
pub type LoginMethodResult<T> = Result<T, LoginMethodError>;

/// Error that can occur while mapping or upserting a login method.
#[derive(Debug, Error)]
pub enum LoginMethodError {
    // Validation errors (raised before any network call)
    /// The source kind is unknown or not valid for the login-method kind.
    #[error("Unsupported sourceType for {kind}: {source_type}")]
    UnsupportedSource {
        kind: LoginMethodKind,
        source_type: String,
    },

    /// A required field for the chosen source kind is missing.
    ///
    /// The field is `source_kind`, not `source`: thiserror treats a field
    /// named `source` as the error's cause, which would require
    /// `SourceKind: std::error::Error`.
    #[error("{kind} {source_kind} source requires {requirement}")]
    MissingSourceFields {
        kind: LoginMethodKind,
        source_kind: SourceKind,
        requirement: String,
    },

    /// A required field for the chosen target kind is missing.
    #[error("{kind} {target} target requires {requirement}")]
    MissingTargetFields {
        kind: LoginMethodKind,
        target: TargetKind,
        requirement: String,
    },

    // Remote read/write errors
    /// The platform has no login method with the given name.
    #[error("login method not found: {name}")]
    NotFound { name: String },

    /// The platform throttled the request.
    #[error("rate limited by platform")]
    RateLimited { retry_after_secs: Option<u64> },

    /// Network-level failure before a response was received.
    #[error("network error during {operation}: {message}")]
    Network { operation: String, message: String },

    /// The platform answered with a non-success status.
    #[error("{operation} failed with status {status}: {message}")]
    Remote {
        operation: String,
        status: u16,
        message: String,
    },

    /// A retryable operation kept failing until the retry budget ran out.
    #[error("max retries exceeded after {attempts} attempt(s): {message}")]
    MaxRetriesExceeded { attempts: u32, message: String },

    // Configuration errors
    /// Client configuration is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Request or response body could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LoginMethodError {
    /// Build the unsupported-source error, keeping the offending
    /// `sourceType` string verbatim.
    pub fn unsupported_source(kind: LoginMethodKind, source_type: impl Into<String>) -> Self {
        Self::UnsupportedSource {
            kind,
            source_type: source_type.into(),
        }
    }

    /// Build a missing-field error for a source kind.
    #[must_use]
    pub fn missing_source_fields(
        kind: LoginMethodKind,
        source_kind: SourceKind,
        fields: &[&str],
    ) -> Self {
        Self::MissingSourceFields {
            kind,
            source_kind,
            requirement: field_requirement(fields),
        }
    }

    /// Build a missing-field error for a target kind.
    #[must_use]
    pub fn missing_target_fields(
        kind: LoginMethodKind,
        target: TargetKind,
        fields: &[&str],
    ) -> Self {
        Self::MissingTargetFields {
            kind,
            target,
            requirement: field_requirement(fields),
        }
    }

    /// Whether the error is a transient failure worth retrying.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } | Self::RateLimited { .. } => true,
            Self::Remote { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Whether the error is the not-found signal from a remote read.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Render a required-field list the way the agent-facing contract words it:
/// `'a' field` for one field, `'a' and 'b' fields` for two.
fn field_requirement(fields: &[&str]) -> String {
    match fields {
        [] => String::new(),
        [only] => format!("'{only}' field"),
        [head @ .., last] => {
            let quoted: Vec<String> = head.iter().map(|f| format!("'{f}'")).collect();
            format!("{} and '{last}' fields", quoted.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_source_message() {
        let err = LoginMethodError::unsupported_source(LoginMethodKind::Token, "InvalidSource");
        assert_eq!(err.to_string(), "Unsupported sourceType for Token: InvalidSource");
    }

    #[test]
    fn test_missing_source_fields_single() {
        let err = LoginMethodError::missing_source_fields(
            LoginMethodKind::UserCredentials,
            SourceKind::ProfileReference,
            &["profileKey"],
        );
        assert_eq!(
            err.to_string(),
            "UserCredentials ProfileReference source requires 'profileKey' field"
        );
    }

    #[test]
    fn test_missing_source_fields_pair() {
        let err = LoginMethodError::missing_source_fields(
            LoginMethodKind::UserCredentials,
            SourceKind::Provided,
            &["username", "password"],
        );
        assert_eq!(
            err.to_string(),
            "UserCredentials Provided source requires 'username' and 'password' fields"
        );
    }

    #[test]
    fn test_missing_target_fields_message() {
        let err = LoginMethodError::missing_target_fields(
            LoginMethodKind::OAuth2,
            TargetKind::QueryParameter,
            &["queryParameterKey"],
        );
        assert_eq!(
            err.to_string(),
            "OAuth2 QueryParameter target requires 'queryParameterKey' field"
        );
    }

    #[test]
    fn test_retryable_classification() {
        assert!(LoginMethodError::Network {
            operation: "createLoginMethod".into(),
            message: "connection reset".into(),
        }
        .is_retryable());
        assert!(LoginMethodError::RateLimited {
            retry_after_secs: Some(2)
        }
        .is_retryable());
        assert!(LoginMethodError::Remote {
            operation: "updateLoginMethod".into(),
            status: 503,
            message: "unavailable".into(),
        }
        .is_retryable());
        assert!(!LoginMethodError::Remote {
            operation: "updateLoginMethod".into(),
            status: 400,
            message: "bad request".into(),
        }
        .is_retryable());
        assert!(!LoginMethodError::NotFound { name: "crm".into() }.is_retryable());
    }
}
