//! Mapper for OAuth 2.0 login methods.

use serde_json::json;

use crate::error::{LoginMethodError, LoginMethodResult};
use crate::mapper::LoginMethodMapper;
use crate::params::UpsertLoginMethodParams;
use crate::types::{
    ExistingLoginMethod, LoginMethodKind, SourceKind, SourceMapping, TargetKind, TargetMapping,
};

use super::{custom_header_mapping, profile_reference_mapping, user_attribute_reference_mapping};

const KIND: LoginMethodKind = LoginMethodKind::OAuth2;

/// Maps OAuth2 login methods.
///
/// Supported sources: `Default` (the default) and `Reference` — both name
/// a configured OAuth2 client — plus `ProfileReference` and
/// `UserAttributeReference`. There is no `Provided` source: the platform
/// never accepts literal OAuth2 credentials on a login method.
///
/// This is the only kind that supports the `QueryParameter` target.
pub struct OAuth2Mapper;

impl LoginMethodMapper for OAuth2Mapper {
    fn default_source_kind(&self) -> SourceKind {
        SourceKind::Default
    }

    fn map_source(
        &self,
        source_type: &str,
        params: &UpsertLoginMethodParams,
        _existing: Option<&ExistingLoginMethod>,
    ) -> LoginMethodResult<SourceMapping> {
        let Some(source) = SourceKind::parse(source_type) else {
            return Err(LoginMethodError::unsupported_source(KIND, source_type));
        };

        match source {
            // Default and Reference share a shape: both point at a
            // configured OAuth2 client by name. No secret is carried, so
            // there is no rotation flag for this kind.
            SourceKind::Default | SourceKind::Reference => {
                let Some(client_name) = params.oauth2_client_name.as_deref() else {
                    return Err(LoginMethodError::missing_source_fields(
                        KIND,
                        source,
                        &["oauth2ClientName"],
                    ));
                };
                Ok(SourceMapping {
                    source: source.code(),
                    source_configuration: json!({ "oauth2ClientName": client_name }),
                })
            }
            SourceKind::ProfileReference => profile_reference_mapping(KIND, params),
            SourceKind::UserAttributeReference => user_attribute_reference_mapping(KIND, params),
            other => Err(LoginMethodError::unsupported_source(KIND, other.as_str())),
        }
    }

    fn map_target(
        &self,
        target_type: &str,
        params: &UpsertLoginMethodParams,
    ) -> LoginMethodResult<TargetMapping> {
        match TargetKind::parse(target_type) {
            Some(TargetKind::CustomHeader) => custom_header_mapping(KIND, params),
            Some(TargetKind::QueryParameter) => {
                let Some(key) = params.query_parameter_key.as_deref() else {
                    return Err(LoginMethodError::missing_target_fields(
                        KIND,
                        TargetKind::QueryParameter,
                        &["queryParameterKey"],
                    ));
                };
                Ok(TargetMapping {
                    target: TargetKind::QueryParameter.code(),
                    target_configuration: Some(json!({ "key": key })),
                })
            }
            // Default, and any target kind outside the supported set,
            // resolves to the platform default.
            _ => Ok(TargetMapping::platform_default()),
        }
    }
}
