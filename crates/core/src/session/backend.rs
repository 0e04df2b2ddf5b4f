//! Storage backends for session credentials.

use std::collections::HashMap;
use std::sync::Mutex;

/// The two places the browser keeps credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Cookies, written by the platform on interactive login.
    Cookie,
    /// Persistent local storage, the mirror the console itself writes.
    Persistent,
}

/// Scoped key-value storage the [`SessionService`](super::SessionService)
/// drives. Implementations must not interpret keys or values.
pub trait CredentialBackend {
    fn read(&self, scope: Scope, key: &str) -> Option<String>;
    fn write(&self, scope: Scope, key: &str, value: &str);
    fn remove(&self, scope: Scope, key: &str);
    /// Drop every entry in the scope.
    fn clear(&self, scope: Scope);
}

/// In-memory backend for tests and non-browser embeddings.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    cookies: Mutex<HashMap<String, String>>,
    persistent: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, scope: Scope) -> &Mutex<HashMap<String, String>> {
        match scope {
            Scope::Cookie => &self.cookies,
            Scope::Persistent => &self.persistent,
        }
    }
}

impl CredentialBackend for MemoryBackend {
    fn read(&self, scope: Scope, key: &str) -> Option<String> {
        self.map(scope).lock().expect("backend lock").get(key).cloned()
    }

    fn write(&self, scope: Scope, key: &str, value: &str) {
        self.map(scope)
            .lock()
            .expect("backend lock")
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, scope: Scope, key: &str) {
        self.map(scope).lock().expect("backend lock").remove(key);
    }

    fn clear(&self, scope: Scope) {
        self.map(scope).lock().expect("backend lock").clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scopes_are_independent() {
        let backend = MemoryBackend::new();
        backend.write(Scope::Cookie, "apiToken", "cookie-value");
        backend.write(Scope::Persistent, "apiToken", "stored-value");

        assert_eq!(
            backend.read(Scope::Cookie, "apiToken").as_deref(),
            Some("cookie-value")
        );
        assert_eq!(
            backend.read(Scope::Persistent, "apiToken").as_deref(),
            Some("stored-value")
        );

        backend.clear(Scope::Persistent);
        assert!(backend.read(Scope::Persistent, "apiToken").is_none());
        assert!(backend.read(Scope::Cookie, "apiToken").is_some());
    }
}
