//! Mapper for bearer-token login methods.

use serde_json::{json, Value};

use crate::error::{LoginMethodError, LoginMethodResult};
use crate::mapper::LoginMethodMapper;
use crate::params::UpsertLoginMethodParams;
use crate::types::{
    ExistingLoginMethod, LoginMethodKind, SourceKind, SourceMapping, TargetKind, TargetMapping,
};

use super::{custom_header_mapping, profile_reference_mapping, user_attribute_reference_mapping};

const KIND: LoginMethodKind = LoginMethodKind::Token;

/// Maps bearer-token login methods.
///
/// Supported sources: `Default` (the default) and `SystemReference`, which
/// carry no configuration of their own, plus `Provided` (a literal token
/// with rotation semantics), `ProfileReference` and
/// `UserAttributeReference`.
///
/// Supported targets: `Default` and `CustomHeader`.
pub struct TokenMapper;

impl LoginMethodMapper for TokenMapper {
    fn default_source_kind(&self) -> SourceKind {
        SourceKind::Default
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
            SourceKind::Default | SourceKind::SystemReference => Ok(SourceMapping {
                source: source.code(),
                source_configuration: json!({}),
            }),
            SourceKind::Provided => {
                let Some(token) = params.token.as_deref() else {
                    return Err(LoginMethodError::missing_source_fields(
                        KIND,
                        source,
                        &["token"],
                    ));
                };

                let mut configuration = json!({ "token": token });
                if existing.is_some() {
                    configuration["changeToken"] = Value::Bool(params.change_token);
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
        target_type: &str,
        params: &UpsertLoginMethodParams,
    ) -> LoginMethodResult<TargetMapping> {
        match TargetKind::parse(target_type) {
            Some(TargetKind::CustomHeader) => custom_header_mapping(KIND, params),
            // QueryParameter is OAuth2-only; it resolves to the default
            // here like any other unsupported target.
            _ => Ok(TargetMapping::platform_default()),
        }
    }
}
