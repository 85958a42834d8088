//! Boundary trait for the remote platform's login-method API.
//!
//! The orchestrator is generic over this trait; the HTTP implementation
//! lives in the platform client crate, and tests substitute an in-memory
//! double.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::LoginMethodResult;
use crate::types::{ExistingLoginMethod, LoginMethodRequest};

/// Remote read/write operations on login methods.
#[async_trait]
pub trait LoginMethodApi: Send + Sync {
    /// Fetch the current remote state of a login method by name.
    ///
    /// Fails with [`LoginMethodError::NotFound`] when the platform has no
    /// login method of that name.
    ///
    /// [`LoginMethodError::NotFound`]: crate::error::LoginMethodError::NotFound
    async fn get_login_method_details(
        &self,
        name: &str,
    ) -> LoginMethodResult<ExistingLoginMethod>;

    /// Create a new login method. Returns the platform's raw response.
    async fn create_login_method(&self, request: &LoginMethodRequest)
        -> LoginMethodResult<Value>;

    /// Update an existing login method. Returns the platform's raw response.
    async fn update_login_method(
        &self,
        request: &LoginMethodRequest,
        existing: &ExistingLoginMethod,
    ) -> LoginMethodResult<Value>;
}
