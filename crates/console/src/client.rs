//! Global client and session-service instances.

use once_cell::sync::Lazy;
use std::sync::Mutex;

use pylon_core::SessionService;
use pylon_http::client::{AuthenticatedPlatformClient, ClientError, PublicPlatformClient};

use crate::storage::BrowserBackend;

static SESSION: Lazy<SessionService<BrowserBackend>> =
    Lazy::new(|| SessionService::new(BrowserBackend::new()));

static PUBLIC_CLIENT: Lazy<Mutex<Option<PublicPlatformClient>>> = Lazy::new(|| Mutex::new(None));

/// The one owner of credential state for the whole console.
pub fn session() -> &'static SessionService<BrowserBackend> {
    &SESSION
}

/// Base URL for API calls: the console is served by the platform itself.
pub fn base_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

pub fn public_client() -> Result<PublicPlatformClient, ClientError> {
    let mut cached = PUBLIC_CLIENT.lock().expect("public client lock");
    if let Some(client) = cached.as_ref() {
        return Ok(client.clone());
    }
    let client = PublicPlatformClient::new(base_url())?;
    *cached = Some(client.clone());
    Ok(client)
}

/// Client bound to the current credentials. Built fresh on every call so a
/// commit or clear in between is always picked up.
pub fn authenticated_client() -> Result<AuthenticatedPlatformClient, ClientError> {
    AuthenticatedPlatformClient::from_credentials(base_url(), &session().credentials())
}
