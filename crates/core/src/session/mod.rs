//! Viewer session state: credentials, storage backends, and the owning service.

mod backend;
mod credentials;
mod service;

pub use backend::{CredentialBackend, MemoryBackend, Scope};
pub use credentials::{IdentityState, SessionCredentials};
pub use service::SessionService;

/// Storage keys shared by the cookie and persistent scopes. The names match
/// the platform's existing deployments so sessions survive a console upgrade.
pub mod keys {
    pub const API_TOKEN: &str = "apiToken";
    pub const AUTH_TOKEN: &str = "authToken";
    pub const CUSTOMER_ID: &str = "customerId";
    /// First-run marker, written once on the first bootstrap login.
    pub const FIRST_RUN: &str = "__yb_new_user__";
}
