//! Session credential snapshot and identity partitioning.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Credentials attached to the current viewer, as read from storage.
///
/// A field holding an empty string is normalized to `None` at construction;
/// downstream code never has to distinguish "missing" from "blank".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCredentials {
    pub api_token: Option<String>,
    pub auth_token: Option<String>,
    pub customer_id: Option<Uuid>,
}

/// Which branch of the route guard applies to a credential snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityState {
    /// No customer id, or no token of either kind. The guard runs the
    /// bootstrap path (insecure login, customer count, login redirect).
    Anonymous,
    /// A customer id plus at least one token. The guard validates the token.
    Identified,
}

impl SessionCredentials {
    pub fn new(
        api_token: Option<String>,
        auth_token: Option<String>,
        customer_id: Option<Uuid>,
    ) -> Self {
        Self {
            api_token: non_blank(api_token),
            auth_token: non_blank(auth_token),
            customer_id,
        }
    }

    pub fn identity(&self) -> IdentityState {
        if self.customer_id.is_none() || (self.api_token.is_none() && self.auth_token.is_none()) {
            IdentityState::Anonymous
        } else {
            IdentityState::Identified
        }
    }

    pub fn is_empty(&self) -> bool {
        self.api_token.is_none() && self.auth_token.is_none() && self.customer_id.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
