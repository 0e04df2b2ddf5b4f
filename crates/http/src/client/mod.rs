//! HTTP client for the platform API.

pub mod error;
mod platform;
mod typed;

pub use error::ClientError;
pub use typed::{AuthenticatedPlatformClient, PublicPlatformClient, TypedClientBuilder};
