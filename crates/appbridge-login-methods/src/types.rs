//! Login method kind enumerations and wire types.
//!
//! The numeric `source` and `target` codes are the stable integers the
//! platform's design-time API understands. Configuration objects are kept
//! as opaque JSON values; their shape is owned by the mappers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The four authentication mechanisms a login method can use.
///
/// Fixed at request time; a login method never changes kind between the
/// create and update of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginMethodKind {
    /// Username/password credentials.
    UserCredentials,
    /// OAuth 2.0 client flow.
    OAuth2,
    /// Opaque bearer token.
    Token,
    /// SAP single sign-on ticket.
    SingleSignOn,
}

impl fmt::Display for LoginMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UserCredentials => "UserCredentials",
            Self::OAuth2 => "OAuth2",
            Self::Token => "Token",
            Self::SingleSignOn => "SingleSignOn",
        };
        f.write_str(name)
    }
}

/// Where the credential material for a login method comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    /// Platform default source for the kind.
    Default,
    /// Literal value supplied with the request.
    Provided,
    /// Reference to a named object (e.g. an OAuth2 client).
    Reference,
    /// Reference to a configured backend system.
    SystemReference,
    /// Reference to a stored profile entry.
    ProfileReference,
    /// Reference to a user attribute.
    UserAttributeReference,
}

impl SourceKind {
    /// Numeric code understood by the platform.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Default => 0,
            Self::Provided => 1,
            Self::Reference => 2,
            Self::SystemReference => 3,
            Self::ProfileReference => 4,
            Self::UserAttributeReference => 5,
        }
    }

    /// Parse a caller-supplied `sourceType` string.
    ///
    /// Returns `None` for anything outside the closed set; the mappers turn
    /// that into their unsupported-source error so the offending string is
    /// reported verbatim.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Default" => Some(Self::Default),
            "Provided" => Some(Self::Provided),
            "Reference" => Some(Self::Reference),
            "SystemReference" => Some(Self::SystemReference),
            "ProfileReference" => Some(Self::ProfileReference),
            "UserAttributeReference" => Some(Self::UserAttributeReference),
            _ => None,
        }
    }

    /// Canonical name, identical to the accepted `sourceType` string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Provided => "Provided",
            Self::Reference => "Reference",
            Self::SystemReference => "SystemReference",
            Self::ProfileReference => "ProfileReference",
            Self::UserAttributeReference => "UserAttributeReference",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the credential material is transmitted on the outbound call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    /// The platform's default transmission mechanism for the kind.
    #[default]
    Default,
    /// A caller-named HTTP header.
    CustomHeader,
    /// A caller-named query string parameter.
    QueryParameter,
}

impl TargetKind {
    /// Numeric code understood by the platform.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Default => 0,
            Self::CustomHeader => 1,
            Self::QueryParameter => 2,
        }
    }

    /// Parse a caller-supplied `targetType` string.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Default" => Some(Self::Default),
            "CustomHeader" => Some(Self::CustomHeader),
            "QueryParameter" => Some(Self::QueryParameter),
            _ => None,
        }
    }

    /// Canonical name, identical to the accepted `targetType` string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::CustomHeader => "CustomHeader",
            Self::QueryParameter => "QueryParameter",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mapped source: the numeric code plus its nested configuration.
///
/// The configuration shape is a function purely of
/// (`LoginMethodKind`, `SourceKind`) and is opaque to the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMapping {
    pub source: i64,
    pub source_configuration: Value,
}

/// A mapped target: the numeric code plus its configuration, present only
/// for custom-header and query-parameter targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetMapping {
    pub target: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_configuration: Option<Value>,
}

impl TargetMapping {
    /// The platform-default target with no configuration.
    #[must_use]
    pub fn platform_default() -> Self {
        Self {
            target: TargetKind::Default.code(),
            target_configuration: None,
        }
    }
}

/// Remote snapshot of an already-configured login method.
///
/// Read-only input to the mappers. Its presence is the sole signal that
/// distinguishes update from create, and the sole trigger that makes
/// secret-rotation flags meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingLoginMethod {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub login_method_kind: LoginMethodKind,
    #[serde(default)]
    pub source: Option<i64>,
    #[serde(default)]
    pub target: Option<i64>,
    #[serde(default)]
    pub source_configuration: Option<Value>,
    #[serde(default)]
    pub configuration: Option<Value>,
}

/// Wire-format request consumed by the platform's create and update calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginMethodRequest {
    pub name: String,
    pub description: String,
    pub login_method_kind: LoginMethodKind,
    pub source: i64,
    pub target: i64,
    pub source_configuration: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_configuration: Option<Value>,
}
