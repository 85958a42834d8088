//! Platform design-time API client.
//!
//! The remote collaborator of the login-method upsert engine: explicit
//! configuration, a reqwest-based client implementing
//! [`appbridge_login_methods::LoginMethodApi`], and a transient-failure
//! retry policy.

pub mod client;
pub mod config;
pub mod retry;

pub use client::PlatformClient;
pub use config::{ConnectionSettings, PlatformAuth, PlatformConfig};
pub use retry::RetryPolicy;
