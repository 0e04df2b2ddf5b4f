//! The single owner of session credential state.
//!
//! Every async completion in the console mutates credentials through this
//! service; nothing else touches the cookie or persistent scopes. Each
//! operation is atomic with respect to a credential snapshot: a reader sees
//! either the state before a commit/clear or the state after it, never a
//! half-written mix.

use uuid::Uuid;

use super::backend::{CredentialBackend, Scope};
use super::credentials::SessionCredentials;
use super::keys;

pub struct SessionService<B: CredentialBackend> {
    backend: B,
}

impl<B: CredentialBackend> SessionService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Snapshot of the current credentials. Cookies take precedence over the
    /// persistent mirror for every key.
    pub fn credentials(&self) -> SessionCredentials {
        let customer_id = self
            .read_with_precedence(keys::CUSTOMER_ID)
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok());
        SessionCredentials::new(
            self.read_with_precedence(keys::API_TOKEN),
            self.read_with_precedence(keys::AUTH_TOKEN),
            customer_id,
        )
    }

    /// Persist the result of a successful bootstrap (insecure) login and mark
    /// the deployment's first run if it has not been marked before.
    pub fn commit_login(&self, api_token: &str, customer_id: Uuid) {
        self.backend
            .write(Scope::Persistent, keys::API_TOKEN, api_token);
        self.backend.write(
            Scope::Persistent,
            keys::CUSTOMER_ID,
            &customer_id.to_string(),
        );
        if self.backend.read(Scope::Persistent, keys::FIRST_RUN).is_none() {
            self.backend.write(Scope::Persistent, keys::FIRST_RUN, "true");
        }
        tracing::debug!(%customer_id, "committed bootstrap login");
    }

    /// Persist the result of an interactive login. The platform also sets its
    /// own cookies on the response; writing them here keeps the snapshot
    /// coherent before the next page load.
    pub fn commit_interactive_login(&self, auth_token: &str, customer_id: Uuid) {
        self.backend.write(Scope::Cookie, keys::AUTH_TOKEN, auth_token);
        let customer = customer_id.to_string();
        self.backend.write(Scope::Cookie, keys::CUSTOMER_ID, &customer);
        self.backend
            .write(Scope::Persistent, keys::CUSTOMER_ID, &customer);
        tracing::debug!(%customer_id, "committed interactive login");
    }

    /// Record the customer id confirmed by token validation.
    pub fn remember_customer(&self, customer_id: Uuid) {
        self.backend.write(
            Scope::Persistent,
            keys::CUSTOMER_ID,
            &customer_id.to_string(),
        );
    }

    /// Wipe the session: the whole persistent scope plus the credential
    /// cookies. Postcondition: [`credentials`](Self::credentials) is empty.
    pub fn clear(&self) {
        self.backend.clear(Scope::Persistent);
        self.backend.remove(Scope::Cookie, keys::API_TOKEN);
        self.backend.remove(Scope::Cookie, keys::AUTH_TOKEN);
        self.backend.remove(Scope::Cookie, keys::CUSTOMER_ID);
        tracing::debug!("cleared session credentials");
    }

    /// Whether this deployment has only ever seen the bootstrap login.
    pub fn is_first_run(&self) -> bool {
        self.backend
            .read(Scope::Persistent, keys::FIRST_RUN)
            .is_some()
    }

    fn read_with_precedence(&self, key: &str) -> Option<String> {
        self.backend
            .read(Scope::Cookie, key)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.backend.read(Scope::Persistent, key))
    }
}
