//! Session guard: decides whether a navigation into the protected subtree
//! may proceed, and where to send the viewer otherwise.

use pylon_core::session::CredentialBackend;
use pylon_core::{IdentityState, SessionService};
use reqwest::StatusCode;

use crate::client::{AuthenticatedPlatformClient, ClientError, PublicPlatformClient};
use crate::paths;
use crate::types::TokenValidation;

/// Where a rejected navigation is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Root,
    Login,
    Register,
}

/// Result of one guard evaluation. The router applies it exactly once per
/// navigation attempt; a flow resolves to exactly one outcome on every path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
    Redirect(RedirectTarget),
}

/// One guard evaluation bound to the session service. All credential writes
/// go through the service; the guard itself holds no mutable state.
pub struct SessionGuard<'a, B: CredentialBackend> {
    public: PublicPlatformClient,
    base_url: String,
    session: &'a SessionService<B>,
}

impl<'a, B: CredentialBackend> SessionGuard<'a, B> {
    pub fn new(
        base_url: impl Into<String>,
        session: &'a SessionService<B>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        Ok(Self {
            public: PublicPlatformClient::new(base_url.clone())?,
            base_url,
            session,
        })
    }

    pub async fn check(&self) -> GuardOutcome {
        match self.session.credentials().identity() {
            IdentityState::Anonymous => self.bootstrap().await,
            IdentityState::Identified => self.validate().await,
        }
    }

    /// No-identity path. The insecure-login and customer-count probes run
    /// concurrently; the outcome follows a fixed precedence: a successful
    /// bootstrap login wins, an empty platform redirects to registration,
    /// anything else lands on the login page. Probe failures are ignored.
    async fn bootstrap(&self) -> GuardOutcome {
        let (login, count) = futures::join!(self.public.insecure_login(), self.public.customer_count());

        match login {
            Ok(response) => {
                self.session
                    .commit_login(&response.api_token, response.customer_uuid);
                return GuardOutcome::Redirect(RedirectTarget::Root);
            }
            Err(err) => tracing::debug!(error = %err, "insecure login unavailable"),
        }

        match count {
            Ok(response) if response.count == 0 => {
                return GuardOutcome::Redirect(RedirectTarget::Register);
            }
            Ok(_) => {}
            Err(err) => tracing::debug!(error = %err, "customer count probe failed"),
        }

        // Stale partial credentials (a token without a customer id, or the
        // reverse) must not survive into the login page.
        self.session.clear();
        GuardOutcome::Redirect(RedirectTarget::Login)
    }

    /// Has-identity path: validate the stored tokens. The raw status is
    /// inspected so the 403 / other-failure / stale-2xx branches stay
    /// distinct.
    async fn validate(&self) -> GuardOutcome {
        let credentials = self.session.credentials();
        let client =
            match AuthenticatedPlatformClient::from_credentials(&self.base_url, &credentials) {
                Ok(client) => client,
                Err(err) => {
                    tracing::warn!(error = %err, "could not build session client");
                    return GuardOutcome::Proceed;
                }
            };

        let response = match client
            .request(reqwest::Method::GET, paths::SESSION_VALIDATE)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                // Network failures are not the viewer's problem.
                tracing::debug!(error = %err, "token validation unreachable");
                return GuardOutcome::Proceed;
            }
        };

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            self.session.clear();
            return GuardOutcome::Redirect(RedirectTarget::Root);
        }
        if !status.is_success() {
            return GuardOutcome::Proceed;
        }
        if status != StatusCode::OK {
            // The platform answered but did not vouch for the session; drop
            // it and let the next navigation re-enter the bootstrap path.
            self.session.clear();
            return GuardOutcome::Proceed;
        }

        match response.json::<TokenValidation>().await {
            Ok(body) => {
                if let Some(uuid) = body.uuid {
                    self.session.remember_customer(uuid);
                }
            }
            Err(err) => tracing::debug!(error = %err, "unparseable validation body"),
        }
        GuardOutcome::Proceed
    }
}
