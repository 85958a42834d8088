//! Caller-facing parameters for login-method upserts.
//!
//! These mirror the agent-facing operation schema: semantically named
//! fields (`username`, `oauth2ClientName`, `profileKey`, ...) that the
//! mappers translate into the platform's numeric source/target codes.

use serde::Deserialize;

use crate::types::LoginMethodKind;

/// Parameters accepted by the login-method upsert operation.
///
/// Only `name`, `description` and `loginMethodKind` are always required;
/// which of the remaining fields must be present depends on the resolved
/// source and target kinds and is enforced by the mappers. Rotation flags
/// default to `false` and are only meaningful on the update path.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertLoginMethodParams {
    pub name: String,
    pub description: String,
    pub login_method_kind: LoginMethodKind,

    /// Source kind name; the mapper's default when omitted.
    #[serde(default)]
    pub source_type: Option<String>,
    /// Target kind name; `Default` when omitted.
    #[serde(default)]
    pub target_type: Option<String>,

    // UserCredentials
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub change_password: bool,

    // OAuth2
    #[serde(default)]
    pub oauth2_client_name: Option<String>,

    // Token
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub change_token: bool,

    // SingleSignOn
    #[serde(default)]
    pub ticket: Option<String>,
    #[serde(default)]
    pub change_ticket: bool,

    // Shared reference sources
    #[serde(default)]
    pub profile_key: Option<String>,
    #[serde(default)]
    pub user_attribute_name: Option<String>,
    #[serde(default)]
    pub user_attribute_category: Option<String>,

    // Targets
    #[serde(default)]
    pub custom_header_name: Option<String>,
    #[serde(default)]
    pub query_parameter_key: Option<String>,
}

impl UpsertLoginMethodParams {
    /// Create parameters with only the always-required fields set.
    pub fn new(
        name: impl Into<String>,
        login_method_kind: LoginMethodKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            login_method_kind,
            source_type: None,
            target_type: None,
            username: None,
            password: None,
            change_password: false,
            oauth2_client_name: None,
            token: None,
            change_token: false,
            ticket: None,
            change_ticket: false,
            profile_key: None,
            user_attribute_name: None,
            user_attribute_category: None,
            custom_header_name: None,
            query_parameter_key: None,
        }
    }
}
