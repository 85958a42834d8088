//! Concrete mappers, one per login-method kind.
//!
//! Each mapper encodes its kind's default source, its supported source
//! kinds with their required fields, and its supported target kinds.
//! The profile-reference and user-attribute-reference sources share the
//! same shape across all four kinds and live here as helpers.

mod oauth2;
mod single_sign_on;
mod token;
mod user_credentials;

pub use oauth2::OAuth2Mapper;
pub use single_sign_on::SingleSignOnMapper;
pub use token::TokenMapper;
pub use user_credentials::UserCredentialsMapper;

use serde_json::json;

use crate::error::{LoginMethodError, LoginMethodResult};
use crate::params::UpsertLoginMethodParams;
use crate::types::{LoginMethodKind, SourceKind, SourceMapping, TargetKind, TargetMapping};

/// Build the `ProfileReference` (source 4) mapping shared by all kinds.
pub(crate) fn profile_reference_mapping(
    kind: LoginMethodKind,
    params: &UpsertLoginMethodParams,
) -> LoginMethodResult<SourceMapping> {
    let Some(profile_key) = params.profile_key.as_deref() else {
        return Err(LoginMethodError::missing_source_fields(
            kind,
            SourceKind::ProfileReference,
            &["profileKey"],
        ));
    };
    Ok(SourceMapping {
        source: SourceKind::ProfileReference.code(),
        source_configuration: json!({ "profileKey": profile_key }),
    })
}

/// Build the `UserAttributeReference` (source 5) mapping shared by all kinds.
pub(crate) fn user_attribute_reference_mapping(
    kind: LoginMethodKind,
    params: &UpsertLoginMethodParams,
) -> LoginMethodResult<SourceMapping> {
    let (Some(name), Some(category)) = (
        params.user_attribute_name.as_deref(),
        params.user_attribute_category.as_deref(),
    ) else {
        return Err(LoginMethodError::missing_source_fields(
            kind,
            SourceKind::UserAttributeReference,
            &["userAttributeName", "userAttributeCategory"],
        ));
    };
    Ok(SourceMapping {
        source: SourceKind::UserAttributeReference.code(),
        source_configuration: json!({
            "userAttributeName": name,
            "userAttributeCategory": category,
        }),
    })
}

/// Build the `CustomHeader` (target 1) mapping shared by Token and OAuth2.
pub(crate) fn custom_header_mapping(
    kind: LoginMethodKind,
    params: &UpsertLoginMethodParams,
) -> LoginMethodResult<TargetMapping> {
    let Some(header_name) = params.custom_header_name.as_deref() else {
        return Err(LoginMethodError::missing_target_fields(
            kind,
            TargetKind::CustomHeader,
            &["customHeaderName"],
        ));
    };
    Ok(TargetMapping {
        target: TargetKind::CustomHeader.code(),
        target_configuration: Some(json!({ "name": header_name })),
    })
}
