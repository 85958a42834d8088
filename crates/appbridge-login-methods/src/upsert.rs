//! Create-or-update orchestration for login methods.
//!
//! One invocation performs at most one remote read and one remote write.
//! The read decides the path: a snapshot means update, any read failure
//! means create. No retries happen at this layer; overlapping upserts for
//! the same name are the caller's problem to serialize.

use serde_json::Value;
use tracing::{debug, info};

use crate::api::LoginMethodApi;
use crate::error::LoginMethodResult;
use crate::mapper::mapper_for;
use crate::params::UpsertLoginMethodParams;
use crate::types::{LoginMethodRequest, TargetKind};

/// Orchestrates login-method upserts against a remote platform client.
pub struct LoginMethodUpserter<C> {
    client: C,
}

impl<C: LoginMethodApi> LoginMethodUpserter<C> {
    /// Create an upserter over the given platform client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Create or update the login method described by `params`.
    ///
    /// Validation happens before any write: an unsupported source kind or a
    /// missing required field aborts the whole operation with no partial
    /// remote mutation. Returns the platform's raw create/update response.
    pub async fn upsert(&self, params: &UpsertLoginMethodParams) -> LoginMethodResult<Value> {
        // Absence of the login method, including any read failure, selects
        // the create path; the read error itself is never re-raised.
        let existing = match self.client.get_login_method_details(&params.name).await {
            Ok(snapshot) => Some(snapshot),
            Err(error) => {
                debug!(
                    name = %params.name,
                    error = %error,
                    "No existing login method found, taking create path"
                );
                None
            }
        };

        let mapper = mapper_for(params.login_method_kind);
        let source_type = params
            .source_type
            .clone()
            .unwrap_or_else(|| mapper.default_source_kind().as_str().to_string());
        let target_type = params
            .target_type
            .clone()
            .unwrap_or_else(|| TargetKind::Default.as_str().to_string());

        let source = mapper.map_source(&source_type, params, existing.as_ref())?;
        let target = mapper.map_target(&target_type, params)?;

        let request = LoginMethodRequest {
            name: params.name.clone(),
            description: params.description.clone(),
            login_method_kind: params.login_method_kind,
            source: source.source,
            target: target.target,
            source_configuration: source.source_configuration,
            target_configuration: target.target_configuration,
        };

        match existing {
            Some(existing) => {
                info!(
                    name = %request.name,
                    kind = %request.login_method_kind,
                    "Updating login method"
                );
                self.client.update_login_method(&request, &existing).await
            }
            None => {
                info!(
                    name = %request.name,
                    kind = %request.login_method_kind,
                    "Creating login method"
                );
                self.client.create_login_method(&request).await
            }
        }
    }
}
