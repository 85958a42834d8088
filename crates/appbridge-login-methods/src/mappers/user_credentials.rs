//! Mapper for username/password login methods.

use serde_json::{json, Value};

use crate::error::{LoginMethodError, LoginMethodResult};
use crate::mapper::LoginMethodMapper;
use crate::params::UpsertLoginMethodParams;
use crate::types::{
    ExistingLoginMethod, LoginMethodKind, SourceKind, SourceMapping, TargetMapping,
};

use super::{profile_reference_mapping, user_attribute_reference_mapping};

const KIND: LoginMethodKind = LoginMethodKind::UserCredentials;

/// Maps user-credential login methods.
///
/// Supported sources: `Provided` (the default), `ProfileReference`,
/// `UserAttributeReference`. `Default` (0) is notably *not* supported:
/// the platform has no default credential source for this kind.
///
/// The target is capability-restricted to the platform default; every
/// `targetType` resolves to `target: 0`.
pub struct UserCredentialsMapper;

impl LoginMethodMapper for UserCredentialsMapper {
    fn default_source_kind(&self) -> SourceKind {
        SourceKind::Provided
    }

    fn map_source(
        &self,
        source_type: &str,
        params: &UpsertLoginMethodParams,
        existing: Option<&ExistingLoginMethod>,
    ) -> LoginMethodResult<SourceMapping> {
        let Some(source) = SourceKind::parse(source_type) else {
            return Err(LoginMethodError::unsupported_source(KIND, source_type));
        };

        match source {
            SourceKind::Provided => {
                let (Some(username), Some(password)) =
                    (params.username.as_deref(), params.password.as_deref())
                else {
                    return Err(LoginMethodError::missing_source_fields(
                        KIND,
                        source,
                        &["username", "password"],
                    ));
                };

                let mut configuration = json!({
                    "username": username,
                    "password": password,
                });
                // Rotation flag only exists on the update path.
                if existing.is_some() {
                    configuration["changePassword"] = Value::Bool(params.change_password);
                }

                Ok(SourceMapping {
                    source: source.code(),
                    source_configuration: configuration,
                })
            }
            SourceKind::ProfileReference => profile_reference_mapping(KIND, params),
            SourceKind::UserAttributeReference => user_attribute_reference_mapping(KIND, params),
            other => Err(LoginMethodError::unsupported_source(KIND, other.as_str())),
        }
    }

    fn map_target(
        &self,
        _target_type: &str,
        _params: &UpsertLoginMethodParams,
    ) -> LoginMethodResult<TargetMapping> {
        Ok(TargetMapping::platform_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provided_params() -> UpsertLoginMethodParams {
        let mut params = UpsertLoginMethodParams::new("crm", KIND, "CRM login");
        params.username = Some("svc-crm".to_string());
        params.password = Some("s3cret".to_string());
        params
    }

    fn existing() -> ExistingLoginMethod {
        ExistingLoginMethod {
            name: "crm".to_string(),
            description: Some("old description".to_string()),
            login_method_kind: KIND,
            source: Some(1),
            target: Some(0),
            source_configuration: None,
            configuration: None,
        }
    }

    #[test]
    fn test_provided_source_on_create() {
        let mapping = UserCredentialsMapper
            .map_source("Provided", &provided_params(), None)
            .unwrap();

        assert_eq!(mapping.source, 1);
        assert_eq!(mapping.source_configuration["username"], "svc-crm");
        assert_eq!(mapping.source_configuration["password"], "s3cret");
        // Create never carries a rotation flag.
        assert!(mapping.source_configuration.get("changePassword").is_none());
    }

    #[test]
    fn test_provided_source_on_update_carries_flag_verbatim() {
        let mut params = provided_params();
        params.change_password = false;
        let mapping = UserCredentialsMapper
            .map_source("Provided", &params, Some(&existing()))
            .unwrap();
        assert_eq!(
            mapping.source_configuration["changePassword"],
            Value::Bool(false)
        );

        params.change_password = true;
        let mapping = UserCredentialsMapper
            .map_source("Provided", &params, Some(&existing()))
            .unwrap();
        assert_eq!(
            mapping.source_configuration["changePassword"],
            Value::Bool(true)
        );
    }

    #[test]
    fn test_provided_source_missing_fields() {
        let params = UpsertLoginMethodParams::new("crm", KIND, "");
        let err = UserCredentialsMapper
            .map_source("Provided", &params, None)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "UserCredentials Provided source requires 'username' and 'password' fields"
        );
    }

    #[test]
    fn test_profile_reference_source() {
        let mut params = UpsertLoginMethodParams::new("crm", KIND, "");
        params.profile_key = Some("crm-profile".to_string());
        let mapping = UserCredentialsMapper
            .map_source("ProfileReference", &params, None)
            .unwrap();

        assert_eq!(mapping.source, 4);
        assert_eq!(
            mapping.source_configuration,
            serde_json::json!({"profileKey": "crm-profile"})
        );
    }

    #[test]
    fn test_user_attribute_reference_source() {
        let mut params = UpsertLoginMethodParams::new("crm", KIND, "");
        params.user_attribute_name = Some("crmUser".to_string());
        params.user_attribute_category = Some("credentials".to_string());
        let mapping = UserCredentialsMapper
            .map_source("UserAttributeReference", &params, None)
            .unwrap();

        assert_eq!(mapping.source, 5);
        assert_eq!(mapping.source_configuration["userAttributeName"], "crmUser");
        assert_eq!(
            mapping.source_configuration["userAttributeCategory"],
            "credentials"
        );
    }

    #[test]
    fn test_user_attribute_reference_missing_fields() {
        let mut params = UpsertLoginMethodParams::new("crm", KIND, "");
        params.user_attribute_name = Some("crmUser".to_string());
        let err = UserCredentialsMapper
            .map_source("UserAttributeReference", &params, None)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "UserCredentials UserAttributeReference source requires 'userAttributeName' and 'userAttributeCategory' fields"
        );
    }

    #[test]
    fn test_default_source_is_unsupported() {
        let err = UserCredentialsMapper
            .map_source("Default", &provided_params(), None)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported sourceType for UserCredentials: Default"
        );
    }

    #[test]
    fn test_unknown_source_string_reported_verbatim() {
        let err = UserCredentialsMapper
            .map_source("InvalidSource", &provided_params(), None)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported sourceType for UserCredentials: InvalidSource"
        );
    }

    #[test]
    fn test_target_is_always_platform_default() {
        // Capability restriction is absolute: even nominally valid target
        // kinds resolve to the default.
        for target_type in ["Default", "CustomHeader", "QueryParameter", "Nonsense"] {
            let mapping = UserCredentialsMapper
                .map_target(target_type, &provided_params())
                .unwrap();
            assert_eq!(mapping.target, 0);
            assert!(mapping.target_configuration.is_none());
        }
    }
}
