//! Browser-backed credential storage: cookies plus `localStorage`.

use pylon_core::session::{CredentialBackend, Scope};
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Storage};

/// Credential backend over the real browser stores. All methods degrade to
/// no-ops when the document or storage is unavailable (e.g. storage disabled
/// by policy); the session then simply reads as anonymous.
#[derive(Debug, Default)]
pub struct BrowserBackend;

impl BrowserBackend {
    pub fn new() -> Self {
        Self
    }
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn read_cookie(key: &str) -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name.trim() == key).then(|| value.trim().to_owned())
    })
}

fn write_cookie(key: &str, value: &str) {
    if let Some(document) = html_document() {
        let _ = document.set_cookie(&format!("{key}={value}; path=/"));
    }
}

fn remove_cookie(key: &str) {
    if let Some(document) = html_document() {
        let _ = document.set_cookie(&format!("{key}=; path=/; max-age=0"));
    }
}

impl CredentialBackend for BrowserBackend {
    fn read(&self, scope: Scope, key: &str) -> Option<String> {
        match scope {
            Scope::Cookie => read_cookie(key),
            Scope::Persistent => local_storage()?.get_item(key).ok().flatten(),
        }
    }

    fn write(&self, scope: Scope, key: &str, value: &str) {
        match scope {
            Scope::Cookie => write_cookie(key, value),
            Scope::Persistent => {
                if let Some(storage) = local_storage() {
                    let _ = storage.set_item(key, value);
                }
            }
        }
    }

    fn remove(&self, scope: Scope, key: &str) {
        match scope {
            Scope::Cookie => remove_cookie(key),
            Scope::Persistent => {
                if let Some(storage) = local_storage() {
                    let _ = storage.remove_item(key);
                }
            }
        }
    }

    fn clear(&self, scope: Scope) {
        match scope {
            Scope::Cookie => {
                for key in [
                    pylon_core::session::keys::API_TOKEN,
                    pylon_core::session::keys::AUTH_TOKEN,
                    pylon_core::session::keys::CUSTOMER_ID,
                ] {
                    remove_cookie(key);
                }
            }
            Scope::Persistent => {
                if let Some(storage) = local_storage() {
                    let _ = storage.clear();
                }
            }
        }
    }
}
