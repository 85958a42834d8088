//! Mapper contract and selector.
//!
//! One mapper per login-method kind translates the semantically named
//! caller parameters into the platform's numeric source/target codes and
//! nested configuration shapes. Mappers are pure: no I/O, no state.

use crate::error::LoginMethodResult;
use crate::mappers::{OAuth2Mapper, SingleSignOnMapper, TokenMapper, UserCredentialsMapper};
use crate::params::UpsertLoginMethodParams;
use crate::types::{
    ExistingLoginMethod, LoginMethodKind, SourceKind, SourceMapping, TargetMapping,
};

/// Mapping contract implemented once per [`LoginMethodKind`].
pub trait LoginMethodMapper: Send + Sync {
    /// Source kind used when the caller does not specify one explicitly.
    fn default_source_kind(&self) -> SourceKind;

    /// Validate the parameters for the given `sourceType` string and build
    /// the source mapping.
    ///
    /// `existing` is the rotation signal: when it is `Some`, secret-bearing
    /// configurations carry the caller's change flag verbatim (including
    /// `false`); when it is `None` (create path), the flag is absent
    /// entirely.
    ///
    /// Fails with [`LoginMethodError::UnsupportedSource`] for any
    /// `sourceType` outside this kind's supported set, and with
    /// [`LoginMethodError::MissingSourceFields`] naming the kind and the
    /// missing field(s) when validation fails.
    ///
    /// [`LoginMethodError::UnsupportedSource`]: crate::error::LoginMethodError::UnsupportedSource
    /// [`LoginMethodError::MissingSourceFields`]: crate::error::LoginMethodError::MissingSourceFields
    fn map_source(
        &self,
        source_type: &str,
        params: &UpsertLoginMethodParams,
        existing: Option<&ExistingLoginMethod>,
    ) -> LoginMethodResult<SourceMapping>;

    /// Validate the parameters for the given `targetType` string and build
    /// the target mapping.
    ///
    /// Target validation is deliberately lenient: a `targetType` the mapper
    /// does not support resolves to the platform default (`target: 0`)
    /// instead of failing. Supported non-default targets still validate
    /// their required fields strictly.
    fn map_target(
        &self,
        target_type: &str,
        params: &UpsertLoginMethodParams,
    ) -> LoginMethodResult<TargetMapping>;
}

/// Select the mapper for a login-method kind.
///
/// The kind set is closed, so this is a fixed table over stateless unit
/// structs rather than a registry.
#[must_use]
pub fn mapper_for(kind: LoginMethodKind) -> &'static dyn LoginMethodMapper {
    match kind {
        LoginMethodKind::UserCredentials => &UserCredentialsMapper,
        LoginMethodKind::OAuth2 => &OAuth2Mapper,
        LoginMethodKind::Token => &TokenMapper,
        LoginMethodKind::SingleSignOn => &SingleSignOnMapper,
    }
}
