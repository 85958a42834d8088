//! Mapper for SAP single sign-on login methods.

use serde_json::{json, Value};

use crate::error::{LoginMethodError, LoginMethodResult};
use crate::mapper::LoginMethodMapper;
use crate::params::UpsertLoginMethodParams;
use crate::types::{
    ExistingLoginMethod, LoginMethodKind, SourceKind, SourceMapping, TargetMapping,
};

use super::{profile_reference_mapping, user_attribute_reference_mapping};

const KIND: LoginMethodKind = LoginMethodKind::SingleSignOn;

/// Maps SAP SSO login methods.
///
/// Same source matrix as [`TokenMapper`](super::TokenMapper) with the
/// secret field named `ticket` instead of `token`. The target is
/// restricted to the platform default.
pub struct SingleSignOnMapper;

impl LoginMethodMapper for SingleSignOnMapper {
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
                let Some(ticket) = params.ticket.as_deref() else {
                    return Err(LoginMethodError::missing_source_fields(
                        KIND,
                        source,
                        &["ticket"],
                    ));
                };

                let mut configuration = json!({ "ticket": ticket });
                if existing.is_some() {
                    configuration["changeTicket"] = Value::Bool(params.change_ticket);
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

    fn ticket_params() -> UpsertLoginMethodParams {
        let mut params = UpsertLoginMethodParams::new("s4", KIND, "S/4 SSO login");
        params.ticket = Some("ticket-xyz".to_string());
        params
    }

    fn existing() -> ExistingLoginMethod {
        ExistingLoginMethod {
            name: "s4".to_string(),
            description: None,
            login_method_kind: KIND,
            source: Some(1),
            target: Some(0),
            source_configuration: None,
            configuration: None,
        }
    }

    #[test]
    fn test_default_source_has_empty_configuration() {
        let mapping = SingleSignOnMapper
            .map_source("Default", &ticket_params(), None)
            .unwrap();
        assert_eq!(mapping.source, 0);
        assert_eq!(mapping.source_configuration, json!({}));
    }

    #[test]
    fn test_system_reference_source() {
        let mapping = SingleSignOnMapper
            .map_source("SystemReference", &ticket_params(), None)
            .unwrap();
        assert_eq!(mapping.source, 3);
        assert_eq!(mapping.source_configuration, json!({}));
    }

    #[test]
    fn test_provided_source_on_create() {
        let mapping = SingleSignOnMapper
            .map_source("Provided", &ticket_params(), None)
            .unwrap();
        assert_eq!(mapping.source, 1);
        assert_eq!(mapping.source_configuration, json!({"ticket": "ticket-xyz"}));
    }

    #[test]
    fn test_provided_source_on_update_carries_flag_verbatim() {
        let mut params = ticket_params();
        params.change_ticket = true;
        let mapping = SingleSignOnMapper
            .map_source("Provided", &params, Some(&existing()))
            .unwrap();
        assert_eq!(
            mapping.source_configuration["changeTicket"],
            Value::Bool(true)
        );

        params.change_ticket = false;
        let mapping = SingleSignOnMapper
            .map_source("Provided", &params, Some(&existing()))
            .unwrap();
        assert_eq!(
            mapping.source_configuration["changeTicket"],
            Value::Bool(false)
        );
    }

    #[test]
    fn test_provided_source_missing_ticket() {
        let params = UpsertLoginMethodParams::new("s4", KIND, "");
        let err = SingleSignOnMapper
            .map_source("Provided", &params, None)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "SingleSignOn Provided source requires 'ticket' field"
        );
    }

    #[test]
    fn test_reference_source_is_unsupported() {
        let err = SingleSignOnMapper
            .map_source("Reference", &ticket_params(), None)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported sourceType for SingleSignOn: Reference"
        );
    }

    #[test]
    fn test_target_is_always_platform_default() {
        for target_type in ["Default", "CustomHeader", "QueryParameter"] {
            let mapping = SingleSignOnMapper
                .map_target(target_type, &ticket_params())
                .unwrap();
            assert_eq!(mapping.target, 0);
            assert!(mapping.target_configuration.is_none());
        }
    }
}
