//! Session operations for the console.

use pylon_http::client::ClientError;
use pylon_http::flows::{GuardOutcome, SessionGuard};
use pylon_http::types::{LoginRequest, RegisterRequest};

use crate::client;

/// Evaluate the route guard against the current credentials.
pub async fn evaluate_guard() -> GuardOutcome {
    match SessionGuard::new(client::base_url(), client::session()) {
        Ok(guard) => guard.check().await,
        Err(err) => {
            // Same policy as a transport failure: never strand the viewer.
            tracing::warn!(error = %err, "session guard unavailable");
            GuardOutcome::Proceed
        }
    }
}

/// Interactive login; commits the returned session before resolving.
pub async fn login(email: String, password: String) -> Result<(), ClientError> {
    let response = client::public_client()?
        .login(&LoginRequest { email, password })
        .await?;
    client::session().commit_interactive_login(&response.auth_token, response.customer_uuid);
    Ok(())
}

/// First-run customer registration; commits the returned session.
pub async fn register(
    name: String,
    email: String,
    password: String,
) -> Result<(), ClientError> {
    let response = client::public_client()?
        .register(&RegisterRequest {
            name,
            email,
            password,
        })
        .await?;
    client::session().commit_interactive_login(&response.auth_token, response.customer_uuid);
    Ok(())
}

pub fn logout() {
    client::session().clear();
}

pub fn is_first_run() -> bool {
    client::session().is_first_run()
}
