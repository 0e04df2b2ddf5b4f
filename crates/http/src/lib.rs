//! Typed client for the Pylon platform REST API, plus the asynchronous
//! console flows (session guard, KMS configuration screen) built on it.

pub mod client;
pub mod flows;
pub mod paths;
pub mod types;

pub use client::{
    AuthenticatedPlatformClient, ClientError, PublicPlatformClient, TypedClientBuilder,
};
pub use flows::{GuardOutcome, KmsScreenState, KmsService, RedirectTarget, SessionGuard, ViewMode};
