//! Uniform success/error payload for agent-facing operations.
//!
//! The calling agent always receives a well-formed outcome: the raw
//! platform response on success, or an error string naming the attempted
//! operation and the underlying cause on failure.

use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use tracing::warn;

use crate::error::LoginMethodResult;

/// Outcome of a wrapped operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OperationOutcome {
    /// Successful outcome carrying the platform's raw response.
    #[must_use]
    pub fn success(result: Value) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    /// Failed outcome naming the operation and the cause.
    pub fn failure(operation: &str, cause: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(format!("{operation} failed: {cause}")),
        }
    }
}

/// Run an operation and fold its result into an [`OperationOutcome`].
///
/// Failures are logged here; they never propagate past the envelope.
pub async fn run_operation<F>(operation: &str, fut: F) -> OperationOutcome
where
    F: Future<Output = LoginMethodResult<Value>>,
{
    match fut.await {
        Ok(result) => OperationOutcome::success(result),
        Err(error) => {
            warn!(operation, error = %error, "Operation failed");
            OperationOutcome::failure(operation, error)
        }
    }
}
