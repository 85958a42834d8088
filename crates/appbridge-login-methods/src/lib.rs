//! Login-method mapping and upsert engine.
//!
//! Translates a small set of user-facing, semantically named parameters
//! (username/password, token, OAuth2 client name, profile key, header
//! name, ...) into the numeric source/target codes and nested
//! configuration shapes the platform's design-time API requires, then
//! creates or updates the named login method on the platform.
//!
//! The mapping layer is pure and synchronous; all I/O goes through the
//! [`api::LoginMethodApi`] boundary trait, implemented by the platform
//! client crate.

pub mod api;
pub mod envelope;
pub mod error;
pub mod mapper;
pub mod mappers;
pub mod params;
pub mod types;
pub mod upsert;

pub use api::LoginMethodApi;
pub use envelope::{run_operation, OperationOutcome};
pub use error::{LoginMethodError, LoginMethodResult};
pub use mapper::{mapper_for, LoginMethodMapper};
pub use params::UpsertLoginMethodParams;
pub use types::{
    ExistingLoginMethod, LoginMethodKind, LoginMethodRequest, SourceKind, SourceMapping,
    TargetKind, TargetMapping,
};
pub use upsert::LoginMethodUpserter;
